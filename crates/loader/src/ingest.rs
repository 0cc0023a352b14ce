use std::{path::Path, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{MeasurementRecord, StationRecord};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open the climate database, creating the file and schema if necessary.
pub async fn open_database(db_path: &str) -> Result<SqlitePool> {
    if let Some(parent) = Path::new(db_path).parent() {
        hawaii_climate_core::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory: {parent:?}"))?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
        .create_if_missing(true)
        .pragma("journal_mode", "WAL")
        .pragma("synchronous", "NORMAL")
        .pragma("busy_timeout", "5000")
        .pragma("cache_size", "-64000")
        .pragma("foreign_keys", "ON")
        .pragma("temp_store", "MEMORY");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .context("Failed to create database connection pool")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoadReport {
    pub stations: usize,
    pub measurements: usize,
}

/// Replace the database contents with the given rows, in one transaction.
///
/// A rerun of the loader is a full reload: a failed load leaves the
/// previous contents intact and repeated runs do not accumulate rows.
pub async fn load(
    pool: &SqlitePool,
    stations: Vec<StationRecord>,
    measurements: Vec<MeasurementRecord>,
) -> Result<LoadReport> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM measurement")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM station").execute(&mut *tx).await?;

    let mut report = LoadReport::default();

    for station in &stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&station.station)
        .bind(&station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.elevation)
        .execute(&mut *tx)
        .await?;
        report.stations += 1;
    }

    for measurement in &measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(&measurement.station)
            .bind(&measurement.date)
            .bind(measurement.prcp)
            .bind(measurement.tobs)
            .execute(&mut *tx)
            .await?;
        report.measurements += 1;
    }

    tx.commit().await?;
    Ok(report)
}
