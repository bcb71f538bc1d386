//! hotelier - read-only hotel listings API
//!
//! Wires the connection pool and HTTP server together and serves until
//! interrupted. All configuration comes from the environment; see
//! `config` for the variable list.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hotelier::config::{DbConfig, ServerConfig};
use hotelier::db;
use hotelier::http::server::run_server;
use hotelier::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let db_config = DbConfig::from_env();
    let server_config = ServerConfig::from_env();

    let pool = db::pool::create_pool(&db_config);

    // Fire-and-forget liveness probe: an unreachable database is logged,
    // never fatal, and must not delay the listener.
    tokio::spawn({
        let pool = pool.clone();
        async move { db::pool::probe(&pool).await }
    });

    let state = AppState::new(pool, server_config.expose_db_errors);
    run_server(state, server_config).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}
