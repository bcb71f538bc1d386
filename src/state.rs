//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    expose_db_errors: bool,
}

impl AppState {
    pub fn new(pool: PgPool, expose_db_errors: bool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                expose_db_errors,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Whether 500 bodies carry the driver message in `details`.
    pub fn expose_db_errors(&self) -> bool {
        self.inner.expose_db_errors
    }
}
