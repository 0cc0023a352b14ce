//! Startup schema reflection.
//!
//! The API does not own the schema; the loader does. Rather than trusting
//! that the file on disk matches, the server reflects the live tables out
//! of `sqlite_master` at startup and refuses to serve a database that is
//! missing a table or column the canned queries touch.

use log::info;
use sqlx::{Row, SqlitePool};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Database is missing the '{0}' table")]
    MissingTable(&'static str),
    #[error("Table '{table}' is missing the '{column}' column")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// A table reflected out of the live database.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<String>,
}

const EXPECTED_TABLES: &[(&str, &[&str])] = &[
    (
        "station",
        &["station", "name", "latitude", "longitude", "elevation"],
    ),
    ("measurement", &["station", "date", "prcp", "tobs"]),
];

/// Reflect the user tables and their columns out of `sqlite_master`.
pub async fn reflect_tables(pool: &SqlitePool) -> Result<Vec<TableSchema>, Error> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx_%'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        // PRAGMA arguments cannot be bound; the name comes from sqlite_master
        let rows = sqlx::query(&format!("PRAGMA table_info({})", name))
            .fetch_all(pool)
            .await?;
        let columns = rows
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect();
        tables.push(TableSchema { name, columns });
    }

    Ok(tables)
}

/// Verify the two climate tables are present with the columns the query
/// layer depends on.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), Error> {
    let tables = reflect_tables(pool).await?;
    info!(
        "reflected tables: [{}]",
        tables
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    for (table, columns) in EXPECTED_TABLES {
        let Some(reflected) = tables.iter().find(|t| t.name == *table) else {
            return Err(Error::MissingTable(table));
        };
        for column in *columns {
            if !reflected.columns.iter().any(|c| c == column) {
                return Err(Error::MissingColumn { table, column });
            }
        }
    }

    Ok(())
}
