use std::fmt;

use anyhow::Result;
use itertools::Itertools;
use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

#[derive(Debug, Clone)]
pub struct TemperatureProfile {
    pub station: String,
    pub lowest: f64,
    pub average: f64,
    pub highest: f64,
}

/// The exploration report the loader prints with `--summary`: dataset
/// coverage, per-station activity, and the temperature profile of the
/// busiest station.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub activity: Vec<StationActivity>,
    pub busiest: Option<TemperatureProfile>,
}

pub async fn summarize(pool: &SqlitePool) -> Result<DatasetSummary> {
    let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
        .fetch_one(pool)
        .await?;
    let measurement_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
        .fetch_one(pool)
        .await?;
    let (first_date, last_date): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
            .fetch_one(pool)
            .await?;

    let activity: Vec<StationActivity> = sqlx::query_as(
        "SELECT station, COUNT(*) AS observations FROM measurement
         GROUP BY station
         ORDER BY observations DESC, station",
    )
    .fetch_all(pool)
    .await?;

    let busiest = match activity.first() {
        Some(top) => {
            let row: (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
                "SELECT MIN(tobs), ROUND(AVG(tobs), 1), MAX(tobs)
                 FROM measurement WHERE station = ?",
            )
            .bind(&top.station)
            .fetch_one(pool)
            .await?;

            match row {
                (Some(lowest), Some(average), Some(highest)) => Some(TemperatureProfile {
                    station: top.station.clone(),
                    lowest,
                    average,
                    highest,
                }),
                _ => None,
            }
        }
        None => None,
    };

    Ok(DatasetSummary {
        station_count,
        measurement_count,
        first_date,
        last_date,
        activity,
        busiest,
    })
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stations:     {}", self.station_count)?;
        writeln!(f, "observations: {}", self.measurement_count)?;
        match (&self.first_date, &self.last_date) {
            (Some(first), Some(last)) => writeln!(f, "coverage:     {} to {}", first, last)?,
            _ => writeln!(f, "coverage:     (no observations)")?,
        }

        if !self.activity.is_empty() {
            writeln!(f, "observations per station:")?;
            let lines = self
                .activity
                .iter()
                .map(|a| format!("  {:<12} {}", a.station, a.observations))
                .join("\n");
            writeln!(f, "{}", lines)?;
        }

        if let Some(profile) = &self.busiest {
            writeln!(
                f,
                "busiest station {}: min {} / avg {} / max {} (tobs)",
                profile.station, profile.lowest, profile.average, profile.highest
            )?;
        }

        Ok(())
    }
}
