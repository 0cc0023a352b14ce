use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{internal_error, AppState, ErrorBody, RouteError};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Database reachable and intact", body = HealthStatus),
        (status = INTERNAL_SERVER_ERROR, description = "Database unreachable or corrupt", body = ErrorBody)
    ))]
pub async fn health_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthStatus>, RouteError> {
    state
        .climate_db
        .health_check()
        .await
        .map_err(internal_error)?;

    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}
