use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, Json};
use time::Duration;

use crate::{internal_error, AppState, ErrorBody, RouteError, TemperatureReading};

/// How far back the precipitation and tobs routes reach from the most
/// recent observation on record.
const LOOKBACK: Duration = Duration::days(365);

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation by date for the last 12 months of data, as a date-keyed object"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query precipitation", body = ErrorBody)
    ))]
pub async fn precipitation_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, RouteError> {
    let Some(latest) = state
        .climate_db
        .latest_observation_date()
        .await
        .map_err(internal_error)?
    else {
        return Ok(Json(BTreeMap::new()));
    };

    let cutoff = latest.saturating_sub(LOOKBACK);
    let readings = state
        .climate_db
        .precipitation_since(cutoff)
        .await
        .map_err(internal_error)?;

    // Readings arrive in date order; on duplicate dates the last row wins.
    let mut by_date = BTreeMap::new();
    for reading in readings {
        by_date.insert(reading.date, reading.prcp);
    }

    Ok(Json(by_date))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations from the most active station for the last 12 months of data", body = Vec<TemperatureReading>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature observations", body = ErrorBody)
    ))]
pub async fn tobs_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureReading>>, RouteError> {
    let Some(station) = state
        .climate_db
        .most_active_station()
        .await
        .map_err(internal_error)?
    else {
        return Ok(Json(Vec::new()));
    };

    let Some(latest) = state
        .climate_db
        .latest_observation_date()
        .await
        .map_err(internal_error)?
    else {
        return Ok(Json(Vec::new()));
    };

    let cutoff = latest.saturating_sub(LOOKBACK);
    let readings = state
        .climate_db
        .temperature_observations(&station, cutoff)
        .await
        .map_err(internal_error)?;

    Ok(Json(readings))
}
