use std::{str::FromStr, time::Duration};

use anyhow::{bail, Context, Result};
use hawaii_climate_core::path_exists;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Read-only handle on the SQLite database the loader produced.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(db_path: &str) -> Result<Self> {
        if !path_exists(db_path) {
            bail!("database not found at {}, run the loader first", db_path);
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
            .read_only(true)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .context("Failed to create database connection pool")?;

        info!("SQLite database opened read-only at: {}", db_path);

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
