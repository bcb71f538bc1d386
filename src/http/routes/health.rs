//! Health check endpoint
//!
//! Always answers 200; database reachability is reported in the body rather
//! than failing the request, mirroring the non-fatal startup probe.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub time: String,
    pub database: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.pool())
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "health probe could not reach database");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        time: Utc::now().to_rfc3339(),
        database,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
