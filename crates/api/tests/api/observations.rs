use std::sync::Arc;

use climate_api::{Error as DbError, PrecipitationReading, TemperatureReading};
use hyper::StatusCode;
use serde_json::json;
use time::macros::date;

use crate::helpers::{get_json, spawn_app, MockClimateAccess};

#[tokio::test]
async fn precipitation_maps_last_twelve_months_of_readings() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_latest_observation_date()
        .returning(|| Ok(Some(date!(2017 - 08 - 23))));
    // 365 days before the most recent observation
    climate_db
        .expect_precipitation_since()
        .withf(|cutoff| *cutoff == date!(2016 - 08 - 23))
        .returning(|_| {
            Ok(vec![
                PrecipitationReading {
                    date: "2016-08-24".to_string(),
                    prcp: Some(0.08),
                },
                PrecipitationReading {
                    date: "2016-08-24".to_string(),
                    prcp: Some(2.15),
                },
                PrecipitationReading {
                    date: "2016-08-25".to_string(),
                    prcp: None,
                },
            ])
        });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/precipitation").await;

    assert!(status.is_success());
    // Duplicate dates collapse, last reading wins; missing prcp stays null
    assert_eq!(body, json!({ "2016-08-24": 2.15, "2016-08-25": null }));
}

#[tokio::test]
async fn precipitation_of_empty_database_is_an_empty_object() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_latest_observation_date()
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/precipitation").await;

    assert!(status.is_success());
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn precipitation_query_failure_is_a_500() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_latest_observation_date()
        .returning(|| Err(DbError::Query(sqlx::Error::RowNotFound)));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn tobs_queries_the_most_active_station() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_most_active_station()
        .returning(|| Ok(Some("USC00519281".to_string())));
    climate_db
        .expect_latest_observation_date()
        .returning(|| Ok(Some(date!(2017 - 08 - 23))));
    climate_db
        .expect_temperature_observations()
        .withf(|station, cutoff| station == "USC00519281" && *cutoff == date!(2016 - 08 - 23))
        .returning(|_, _| {
            Ok(vec![
                TemperatureReading {
                    date: "2016-08-24".to_string(),
                    temperature: 77.0,
                },
                TemperatureReading {
                    date: "2016-08-25".to_string(),
                    temperature: 80.0,
                },
            ])
        });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/tobs").await;

    assert!(status.is_success());
    assert_eq!(
        body,
        json!([
            { "date": "2016-08-24", "temperature": 77.0 },
            { "date": "2016-08-25", "temperature": 80.0 }
        ])
    );
}

#[tokio::test]
async fn tobs_of_empty_database_is_an_empty_list() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_most_active_station()
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = get_json(&test_app.app, "/api/v1.0/tobs").await;

    assert!(status.is_success());
    assert_eq!(body, json!([]));
}
