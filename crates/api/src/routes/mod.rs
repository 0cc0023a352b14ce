pub mod health;
pub mod home;
pub mod observations;
pub mod stations;
pub mod temperature;

pub use health::*;
pub use home::*;
pub use observations::*;
pub use stations::*;
pub use temperature::*;

use axum::{http::StatusCode, Json};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db;

/// JSON error body shared by every route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) type RouteError = (StatusCode, Json<ErrorBody>);

pub(crate) fn internal_error(err: db::Error) -> RouteError {
    error!("query failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

pub(crate) fn invalid_date() -> RouteError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "Invalid date format. Use YYYY-MM-DD.".to_string(),
        }),
    )
}

pub(crate) fn no_data(message: &str) -> RouteError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}
