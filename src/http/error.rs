//! API error types with IntoResponse
//!
//! Errors are converted to JSON envelopes at the handler boundary; nothing
//! propagates far enough to take the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { message: &'static str },

    /// Database error (500, always logged; detail exposure is configurable)
    Database { detail: Option<String> },
}

impl ApiError {
    /// Wrap a storage error, deciding at construction whether the driver
    /// message is echoed back to the caller. The full error goes to the log
    /// either way.
    pub fn database(err: DbError, expose_detail: bool) -> Self {
        tracing::error!(error = %err, "database error");
        Self::Database {
            detail: expose_detail.then(|| err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound { message } => (StatusCode::NOT_FOUND, json!({ "error": message })),
            Self::Database {
                detail: Some(detail),
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": detail }),
            ),
            Self::Database { detail: None } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
