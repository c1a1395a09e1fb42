use std::time::Duration;

use gamehub_catalog::store::rest::{DEFAULT_TABLE, DEFAULT_TIMEOUT};
use gamehub_catalog::store::RestStoreConfig;

use crate::auth::session::AuthConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret and the store credentials have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token verification settings.
    pub auth: AuthConfig,
    /// Which remote store backs the catalog.
    pub store: StoreConfig,
    /// Periodic catalog re-fetch interval in seconds; `0` disables it.
    pub catalog_refresh_secs: u64,
}

/// Remote store selection.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Managed backend reached over its REST table API.
    Rest(RestStoreConfig),
    /// Direct PostgreSQL connection.
    Postgres { database_url: String },
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl StoreConfig {
    /// Short backend name as used by `STORE_BACKEND`.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Rest(_) => "rest",
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::Memory => "memory",
        }
    }

    /// Load the store selection from environment variables.
    ///
    /// | Env Var              | Default                     |
    /// |----------------------|-----------------------------|
    /// | `STORE_BACKEND`      | `rest`                      |
    /// | `STORE_URL`          | required for `rest`         |
    /// | `STORE_API_KEY`      | required for `rest`         |
    /// | `STORE_TABLE`        | `games`                     |
    /// | `STORE_TIMEOUT_SECS` | `10`                        |
    /// | `DATABASE_URL`       | required for `postgres`     |
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend or a missing required variable.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "rest".into());

        match backend.as_str() {
            "rest" => {
                let base_url = std::env::var("STORE_URL")
                    .expect("STORE_URL must be set when STORE_BACKEND=rest");
                let api_key = std::env::var("STORE_API_KEY")
                    .expect("STORE_API_KEY must be set when STORE_BACKEND=rest");

                let mut config = RestStoreConfig::new(base_url, api_key);
                config.table = std::env::var("STORE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.into());
                config.timeout = std::env::var("STORE_TIMEOUT_SECS")
                    .ok()
                    .map(|v| {
                        v.parse()
                            .map(Duration::from_secs)
                            .expect("STORE_TIMEOUT_SECS must be a valid u64")
                    })
                    .unwrap_or(DEFAULT_TIMEOUT);
                StoreConfig::Rest(config)
            }
            "postgres" => {
                let database_url = std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORE_BACKEND=postgres");
                StoreConfig::Postgres { database_url }
            }
            "memory" => StoreConfig::Memory,
            other => panic!("Unknown STORE_BACKEND '{other}' (expected rest, postgres or memory)"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `CATALOG_REFRESH_SECS` | `0`                        |
    ///
    /// Session and store settings are read by [`AuthConfig::from_env`] and
    /// [`StoreConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_refresh_secs: u64 = std::env::var("CATALOG_REFRESH_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("CATALOG_REFRESH_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth: AuthConfig::from_env(),
            store: StoreConfig::from_env(),
            catalog_refresh_secs,
        }
    }
}
