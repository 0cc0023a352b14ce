use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteListing {
    pub path: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiIndex {
    pub message: String,
    pub routes: Vec<RouteListing>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = OK, description = "List the available routes", body = ApiIndex)
    ))]
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Json<ApiIndex> {
    let base = state.remote_url.trim_end_matches('/');
    let routes = [
        (
            "/api/v1.0/precipitation",
            "Precipitation by date for the last 12 months of data",
        ),
        ("/api/v1.0/stations", "All weather station identifiers"),
        (
            "/api/v1.0/tobs",
            "Temperature observations from the most active station for the last 12 months of data",
        ),
        (
            "/api/v1.0/{start}",
            "Min/avg/max temperature from a start date (YYYY-MM-DD)",
        ),
        (
            "/api/v1.0/{start}/{end}",
            "Min/avg/max temperature for a date range (YYYY-MM-DD)",
        ),
    ]
    .into_iter()
    .map(|(path, description)| RouteListing {
        path: format!("{}{}", base, path),
        description: description.to_string(),
    })
    .collect();

    Json(ApiIndex {
        message: "Welcome to the Hawaii Climate Analysis API!".to_string(),
        routes,
    })
}
