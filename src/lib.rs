//! hotelier: read-only HTTP API over a hotel database
//!
//! Serves hotel details (joined with their images), per-hotel room listings,
//! and uploaded media files. All data is owned by an external PostgreSQL
//! database; this service is a read-through projection of it.

pub mod config;
pub mod db;
pub mod http;
pub mod state;

pub use config::{DbConfig, ServerConfig};
pub use http::error::ApiError;
pub use http::server::{build_router, run_server};
pub use state::AppState;
