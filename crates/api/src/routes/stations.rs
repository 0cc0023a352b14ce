use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{internal_error, AppState, ErrorBody, RouteError};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "All station identifiers", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query stations", body = ErrorBody)
    ))]
pub async fn stations_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, RouteError> {
    let stations = state
        .climate_db
        .station_ids()
        .await
        .map_err(internal_error)?;

    Ok(Json(stations))
}
