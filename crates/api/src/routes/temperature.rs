use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use hawaii_climate_core::parse_date;

use crate::{internal_error, invalid_date, no_data, AppState, ErrorBody, RouteError, TemperatureStats};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Start date in YYYY-MM-DD format"),
    ),
    responses(
        (status = OK, description = "Min/avg/max temperature from the start date onward", body = TemperatureStats),
        (status = BAD_REQUEST, description = "Invalid date format", body = ErrorBody),
        (status = NOT_FOUND, description = "No observations on or after the start date", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperatures", body = ErrorBody)
    ))]
pub async fn temperature_from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, RouteError> {
    let start = parse_date(&start).map_err(|_| invalid_date())?;

    match state
        .climate_db
        .temperature_stats(start, None)
        .await
        .map_err(internal_error)?
    {
        Some(stats) => Ok(Json(stats)),
        None => Err(no_data("No data found for the given start date.")),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Start date in YYYY-MM-DD format"),
        ("end" = String, Path, description = "End date in YYYY-MM-DD format, inclusive"),
    ),
    responses(
        (status = OK, description = "Min/avg/max temperature over the date range", body = TemperatureStats),
        (status = BAD_REQUEST, description = "Invalid date format", body = ErrorBody),
        (status = NOT_FOUND, description = "No observations inside the range", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperatures", body = ErrorBody)
    ))]
pub async fn temperature_for_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, RouteError> {
    let start = parse_date(&start).map_err(|_| invalid_date())?;
    let end = parse_date(&end).map_err(|_| invalid_date())?;

    match state
        .climate_db
        .temperature_stats(start, Some(end))
        .await
        .map_err(internal_error)?
    {
        Some(stats) => Ok(Json(stats)),
        None => Err(no_data("No data found for the given date range.")),
    }
}
