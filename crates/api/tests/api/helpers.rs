use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use climate_api::{
    app, AppState, ClimateData, Error as DbError, PrecipitationReading, TemperatureReading,
    TemperatureStats,
};
use hyper::{Method, StatusCode};
use mockall::mock;
use time::Date;
use tower::ServiceExt;

mock! {
    pub ClimateAccess {}

    #[async_trait]
    impl ClimateData for ClimateAccess {
        async fn health_check(&self) -> Result<(), DbError>;
        async fn latest_observation_date(&self) -> Result<Option<Date>, DbError>;
        async fn precipitation_since(
            &self,
            cutoff: Date,
        ) -> Result<Vec<PrecipitationReading>, DbError>;
        async fn station_ids(&self) -> Result<Vec<String>, DbError>;
        async fn most_active_station(&self) -> Result<Option<String>, DbError>;
        async fn temperature_observations(
            &self,
            station: &str,
            cutoff: Date,
        ) -> Result<Vec<TemperatureReading>, DbError>;
        async fn temperature_stats(
            &self,
            start: Date,
            end: Option<Date>,
        ) -> Result<Option<TemperatureStats>, DbError>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(climate_db: Arc<dyn ClimateData>) -> TestApp {
    let app_state = AppState {
        remote_url: "http://localhost:9090".to_string(),
        climate_db,
    };

    TestApp {
        app: app(app_state),
    }
}

/// Run one GET against the router and decode the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body.");
    let body = serde_json::from_slice(&bytes).expect("Response body was not JSON.");

    (status, body)
}
