use std::sync::Arc;

use climate_api::TemperatureStats;
use hyper::StatusCode;
use serde_json::json;
use time::macros::date;

use crate::helpers::{get_json, spawn_app, MockClimateAccess};

#[tokio::test]
async fn start_route_returns_min_avg_max() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_temperature_stats()
        .withf(|start, end| *start == date!(2017 - 01 - 01) && end.is_none())
        .returning(|_, _| {
            Ok(Some(TemperatureStats {
                tmin: 58.0,
                tavg: 74.6,
                tmax: 87.0,
            }))
        });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/2017-01-01").await;

    assert!(status.is_success());
    assert_eq!(body, json!({ "TMIN": 58.0, "TAVG": 74.6, "TMAX": 87.0 }));
}

#[tokio::test]
async fn range_route_passes_both_dates() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_temperature_stats()
        .withf(|start, end| {
            *start == date!(2017 - 01 - 01) && *end == Some(date!(2017 - 01 - 07))
        })
        .returning(|_, _| {
            Ok(Some(TemperatureStats {
                tmin: 62.0,
                tavg: 69.0,
                tmax: 74.0,
            }))
        });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/2017-01-01/2017-01-07").await;

    assert!(status.is_success());
    assert_eq!(body, json!({ "TMIN": 62.0, "TAVG": 69.0, "TMAX": 74.0 }));
}

#[tokio::test]
async fn invalid_start_date_is_a_400() {
    // No expectations: a malformed date must never reach the database
    let climate_db = MockClimateAccess::new();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/not-a-date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid date format. Use YYYY-MM-DD." }));
}

#[tokio::test]
async fn invalid_end_date_is_a_400() {
    let climate_db = MockClimateAccess::new();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/2017-01-01/2017-13-40").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid date format. Use YYYY-MM-DD." }));
}

#[tokio::test]
async fn missing_data_from_start_is_a_404() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_temperature_stats()
        .returning(|_, _| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/2030-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "No data found for the given start date." })
    );
}

#[tokio::test]
async fn missing_data_in_range_is_a_404() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_temperature_stats()
        .returning(|_, _| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/2030-01-01/2030-02-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "No data found for the given date range." })
    );
}

#[tokio::test]
async fn start_after_end_is_just_a_404() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_temperature_stats()
        .withf(|start, end| {
            *start == date!(2017 - 02 - 01) && *end == Some(date!(2017 - 01 - 01))
        })
        .returning(|_, _| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, _) = get_json(&test_app.app, "/api/v1.0/2017-02-01/2017-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
