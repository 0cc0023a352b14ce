use async_trait::async_trait;
use hawaii_climate_core::{format_date, parse_date};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use time::Date;
use utoipa::ToSchema;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to format date: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("Failed to parse stored date: {0}")]
    DateParse(#[from] time::error::Parse),
    #[error("Database integrity check failed: {0}")]
    Integrity(String),
}

/// One `(date, prcp)` pair from the measurement table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One `(date, tobs)` pair from the measurement table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct TemperatureReading {
    pub date: String,
    pub temperature: f64,
}

/// Min/avg/max temperature over a date range. The average carries exactly
/// one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub tmin: f64,
    #[serde(rename = "TAVG")]
    pub tavg: f64,
    #[serde(rename = "TMAX")]
    pub tmax: f64,
}

/// The fixed set of queries the routes run. Object-safe so tests can swap
/// in a mock.
#[async_trait]
pub trait ClimateData: Sync + Send {
    async fn health_check(&self) -> Result<(), Error>;
    /// Most recent observation date on record, if any rows exist.
    async fn latest_observation_date(&self) -> Result<Option<Date>, Error>;
    /// All `(date, prcp)` pairs on or after the cutoff, date ascending.
    async fn precipitation_since(&self, cutoff: Date)
        -> Result<Vec<PrecipitationReading>, Error>;
    async fn station_ids(&self) -> Result<Vec<String>, Error>;
    /// Station id with the most observations; ties break on station id.
    async fn most_active_station(&self) -> Result<Option<String>, Error>;
    async fn temperature_observations(
        &self,
        station: &str,
        cutoff: Date,
    ) -> Result<Vec<TemperatureReading>, Error>;
    /// `None` when the range matches no rows.
    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<Option<TemperatureStats>, Error>;
}

pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn health_check(&self) -> Result<(), Error> {
        // Basic connectivity
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        // Page structure integrity
        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Integrity(result));
        }

        Ok(())
    }

    async fn latest_observation_date(&self) -> Result<Option<Date>, Error> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        match latest {
            Some(date) => Ok(Some(parse_date(&date)?)),
            None => Ok(None),
        }
    }

    async fn precipitation_since(
        &self,
        cutoff: Date,
    ) -> Result<Vec<PrecipitationReading>, Error> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date",
        )
        .bind(format_date(cutoff)?)
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    async fn station_ids(&self) -> Result<Vec<String>, Error> {
        Ok(
            sqlx::query_scalar("SELECT station FROM station ORDER BY station")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn most_active_station(&self) -> Result<Option<String>, Error> {
        Ok(sqlx::query_scalar(
            "SELECT station FROM measurement
             GROUP BY station
             ORDER BY COUNT(*) DESC, station
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn temperature_observations(
        &self,
        station: &str,
        cutoff: Date,
    ) -> Result<Vec<TemperatureReading>, Error> {
        Ok(sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, tobs AS temperature FROM measurement
             WHERE station = ? AND date >= ?
             ORDER BY date",
        )
        .bind(station)
        .bind(format_date(cutoff)?)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<Option<TemperatureStats>, Error> {
        let start = format_date(start)?;

        let row: (Option<f64>, Option<f64>, Option<f64>) = match end {
            Some(end) => {
                sqlx::query_as(
                    "SELECT MIN(tobs), ROUND(AVG(tobs), 1), MAX(tobs)
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(format_date(end)?)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT MIN(tobs), ROUND(AVG(tobs), 1), MAX(tobs)
                     FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };

        match row {
            (Some(tmin), Some(tavg), Some(tmax)) => Ok(Some(TemperatureStats { tmin, tavg, tmax })),
            _ => Ok(None),
        }
    }
}
