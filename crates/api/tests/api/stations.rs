use std::sync::Arc;

use climate_api::Error as DbError;
use hyper::StatusCode;
use serde_json::json;

use crate::helpers::{get_json, spawn_app, MockClimateAccess};

#[tokio::test]
async fn stations_lists_all_identifiers() {
    let mut climate_db = MockClimateAccess::new();
    climate_db.expect_station_ids().returning(|| {
        Ok(vec![
            "USC00513117".to_string(),
            "USC00519281".to_string(),
            "USC00519397".to_string(),
        ])
    });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/stations").await;

    assert!(status.is_success());
    assert_eq!(body, json!(["USC00513117", "USC00519281", "USC00519397"]));
}

#[tokio::test]
async fn stations_query_failure_is_a_500() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_station_ids()
        .returning(|| Err(DbError::Query(sqlx::Error::RowNotFound)));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}
