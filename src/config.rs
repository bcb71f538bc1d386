//! Runtime configuration, read from the environment once at startup.
//!
//! Database settings come in component form (the connection options are
//! assembled from them, never spliced into a URL string):
//! - `DB_USER`, `DB_HOST`, `DB_NAME`, `DB_PASSWORD`, `DB_PORT`
//! - `DB_MAX_CONNECTIONS`: pool bound (default: 5)
//!
//! Server settings:
//! - `PORT`: listen port (default: 5000)
//! - `UPLOADS_DIR`: static file directory served under /uploads (default: uploads)
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origin allowlist; unset means any origin
//! - `EXPOSE_DB_ERRORS`: include the driver message in 500 bodies (default: true)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PORT: u16 = 5432;

/// Default maximum connections for the pool.
/// Kept low; two read endpoints do not need more.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DbConfig {
    /// Create config from `DB_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            user: env_or("DB_USER", "postgres"),
            host: env_or("DB_HOST", "localhost"),
            database: env_or("DB_NAME", "hotels"),
            password: env_or("DB_PASSWORD", ""),
            port: env_parsed("DB_PORT", DEFAULT_DB_PORT),
            max_connections: env_parsed("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Assemble sqlx connect options from the components.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: String::from("postgres"),
            host: String::from("localhost"),
            database: String::from("hotels"),
            password: String::new(),
            port: DEFAULT_DB_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Directory served byte-for-byte under /uploads
    pub uploads_dir: PathBuf,

    /// Origin allowlist; `None` allows any origin.
    ///
    /// The open default matches what the site frontends expect; deployments
    /// that want a boundary set `CORS_ALLOWED_ORIGINS`.
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Echo the driver message in the `details` field of 500 bodies.
    pub expose_db_errors: bool,
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let port = env_parsed("PORT", DEFAULT_PORT);

        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            uploads_dir: std::env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(parse_origin_list),
            expose_db_errors: env_parsed("EXPOSE_DB_ERRORS", true),
        }
    }

    /// Config with an explicit uploads directory (for testing).
    pub fn with_uploads_dir(uploads_dir: PathBuf) -> Self {
        Self {
            uploads_dir,
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            uploads_dir: PathBuf::from("uploads"),
            cors_allowed_origins: None,
            expose_db_errors: true,
        }
    }
}

fn parse_origin_list(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to the default on a missing
/// or malformed value. Startup never aborts over config shape.
fn env_parsed<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("ignoring unparseable {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.uploads_dir, PathBuf::from("uploads"));
        assert!(config.cors_allowed_origins.is_none());
        assert!(config.expose_db_errors);
    }

    #[test]
    fn connect_options_carry_components() {
        let config = DbConfig {
            user: "reader".into(),
            host: "db.internal".into(),
            database: "lodging".into(),
            password: "secret".into(),
            port: 6432,
            max_connections: 2,
        };

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6432);
        assert_eq!(options.get_username(), "reader");
        assert_eq!(options.get_database(), Some("lodging"));
    }

    #[test]
    fn origin_list_splits_and_trims() {
        let origins = parse_origin_list("https://a.example, https://b.example ,".into());
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }
}
