//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are opened
//! lazily: the pool exists from startup, but an unreachable database only
//! surfaces on the first query that needs a connection.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool.
///
/// The pool is bounded by `config.max_connections` and never connects
/// eagerly, so this cannot fail and the service starts regardless of
/// database reachability.
pub fn create_pool(config: &DbConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Startup liveness probe.
///
/// Runs one `SELECT NOW()` and logs the outcome. Failure is logged and
/// swallowed; real requests surface the error themselves.
pub async fn probe(pool: &PgPool) {
    match sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(pool)
        .await
    {
        Ok(now) => tracing::info!(server_time = %now.to_rfc3339(), "connected to database"),
        Err(e) => tracing::error!(error = %e, "could not reach database at startup"),
    }
}
