//! HTTP layer - axum server, routes, and error mapping

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerError};
