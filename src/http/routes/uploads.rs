//! Static file serving for /uploads/
//!
//! Upload files land in the directory out of band; this service only reads
//! them. Content-type is inferred from the file extension and missing files
//! answer 404.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create router for static file serving from /uploads/
pub fn router(uploads_dir: &Path) -> Router<AppState> {
    tracing::info!(path = %uploads_dir.display(), "serving static files from /uploads/");

    Router::new().nest_service("/uploads", ServeDir::new(uploads_dir))
}
