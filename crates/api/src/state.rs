use std::sync::Arc;

use gamehub_catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog mirror and its remote store.
    pub catalog: Arc<Catalog>,
    /// Server configuration (session verification settings in particular).
    pub config: Arc<ServerConfig>,
}
