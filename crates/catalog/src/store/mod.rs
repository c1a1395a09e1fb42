//! The remote store seam.
//!
//! [`GameStore`] is the row-oriented contract the catalog consumes: select
//! all (newest first), insert one, update by id, delete by id. Backends:
//!
//! - [`rest::RestStore`] -- PostgREST-style REST API of a managed backend.
//! - [`postgres::PgStore`] -- the same table accessed directly via sqlx.
//! - [`memory::MemoryStore`] -- process-local, for development and tests.

use async_trait::async_trait;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::types::EntryId;

pub mod memory;
pub mod postgres;
pub mod rest;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use rest::{RestStore, RestStoreConfig};

/// Errors from a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The REST API returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Update or delete matched no row.
    #[error("No game with id {0}")]
    NotFound(EntryId),

    /// The backend cannot serve requests at all.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Row-oriented CRUD over the single `games` collection.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Every game, ordered by `created_at` descending.
    async fn list_games(&self) -> Result<Vec<Game>, StoreError>;

    /// Insert one game. The store assigns `id` and `created_at`.
    async fn insert_game(&self, draft: &GameDraft) -> Result<(), StoreError>;

    /// Apply `patch` to the game with `id`.
    async fn update_game(&self, id: EntryId, patch: &GameUpdate) -> Result<(), StoreError>;

    /// Remove the game with `id`.
    async fn delete_game(&self, id: EntryId) -> Result<(), StoreError>;

    /// Cheap liveness probe.
    async fn health_check(&self) -> Result<(), StoreError>;
}
