use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    db,
    db::verify_schema,
    health_handler, index_handler, precipitation_handler, routes, stations_handler,
    temperature_for_range, temperature_from_start, tobs_handler, ClimateAccess, ClimateData,
    Database,
};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub climate_db: Arc<dyn ClimateData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::home::index_handler,
        routes::health::health_handler,
        routes::observations::precipitation_handler,
        routes::observations::tobs_handler,
        routes::stations::stations_handler,
        routes::temperature::temperature_from_start,
        routes::temperature::temperature_for_range,
    ),
    components(
        schemas(
                routes::ErrorBody,
                routes::home::ApiIndex,
                routes::home::RouteListing,
                routes::health::HealthStatus,
                db::TemperatureReading,
                db::TemperatureStats
            )
    ),
    tags(
        (name = "hawaii climate api", description = "a RESTful api over historical Hawaii precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(remote_url: String, db_path: String) -> Result<AppState, anyhow::Error> {
    let db = Database::new(&db_path)
        .await
        .map_err(|e| anyhow!("error opening climate database: {}", e))?;

    verify_schema(db.pool())
        .await
        .map_err(|e| anyhow!("error verifying climate schema: {}", e))?;

    let climate_db = Arc::new(ClimateAccess::new(db.pool().clone()));

    Ok(AppState {
        remote_url,
        climate_db,
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        // API routes
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/{start}", get(temperature_from_start))
        .route("/api/v1.0/{start}/{end}", get(temperature_for_range))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
