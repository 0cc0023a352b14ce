use std::sync::Arc;

use climate_api::Error as DbError;
use hyper::StatusCode;
use serde_json::json;

use crate::helpers::{get_json, spawn_app, MockClimateAccess};

#[tokio::test]
async fn health_is_ok_when_database_checks_out() {
    let mut climate_db = MockClimateAccess::new();
    climate_db.expect_health_check().returning(|| Ok(()));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/health").await;

    assert!(status.is_success());
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_reports_corruption_as_a_500() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_health_check()
        .returning(|| Err(DbError::Integrity("page 3 is never used".to_string())));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("integrity check failed"));
}
