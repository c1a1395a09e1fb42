//! The catalog access component.
//!
//! [`Catalog`] owns the in-process mirror of the remote `games` collection.
//! The mirror only ever holds the result of a successful fetch: mutations go
//! to the store first and are followed by exactly one full re-fetch, never
//! by an optimistic local patch.
//!
//! The mirror lives in a `watch` channel. Readers borrow the latest
//! [`CatalogSnapshot`]; [`Catalog::subscribe`] hands out receivers that see
//! every pending / synced / failed transition.

use std::sync::Arc;

use chrono::Utc;
use gamehub_core::filter::GameQuery;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::stats::CatalogStats;
use gamehub_core::types::{EntryId, Timestamp};
use tokio::sync::watch;

use crate::error::CatalogError;
use crate::store::GameStore;

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// A fetch is in flight, or none has been started yet.
    Pending,
    /// The last fetch succeeded.
    Synced { at: Timestamp },
    /// The last fetch failed; `games` still holds the previous result.
    Failed { at: Timestamp, message: String },
}

/// Point-in-time view of the catalog.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Entries from the last successful fetch, newest first.
    pub games: Arc<Vec<Game>>,
    pub state: SyncState,
    /// True until the first fetch completes, successfully or not.
    pub loading: bool,
}

impl CatalogSnapshot {
    fn initial() -> Self {
        Self {
            games: Arc::new(Vec::new()),
            state: SyncState::Pending,
            loading: true,
        }
    }
}

/// Read/mutate access to the remote game catalog.
pub struct Catalog {
    store: Arc<dyn GameStore>,
    state: watch::Sender<CatalogSnapshot>,
}

impl Catalog {
    /// Create a catalog over `store`. The mirror starts empty and loading;
    /// call [`Catalog::fetch_all`] to populate it.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::initial());
        Self { store, state }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    // -----------------------------------------------------------------------
    // Fetch
    // -----------------------------------------------------------------------

    /// Replace the mirror with every game from the store, newest first.
    ///
    /// On failure the error is logged, the state becomes
    /// [`SyncState::Failed`] and the previously held games are kept.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<Game>>, CatalogError> {
        self.state.send_modify(|s| s.state = SyncState::Pending);

        match self.store.list_games().await {
            Ok(games) => {
                let games = Arc::new(games);
                let count = games.len();
                self.state.send_modify(|s| {
                    s.games = Arc::clone(&games);
                    s.state = SyncState::Synced { at: Utc::now() };
                    s.loading = false;
                });
                tracing::debug!(count, backend = self.store.backend_name(), "Catalog synced");
                Ok(games)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    backend = self.store.backend_name(),
                    "Error fetching games",
                );
                let message = e.to_string();
                self.state.send_modify(|s| {
                    s.state = SyncState::Failed {
                        at: Utc::now(),
                        message,
                    };
                    s.loading = false;
                });
                Err(CatalogError::Remote(e))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Mutate
    // -----------------------------------------------------------------------

    /// Insert `draft` into the store, then re-fetch.
    pub async fn create(&self, draft: &GameDraft) -> Result<(), CatalogError> {
        if let Err(e) = self.store.insert_game(draft).await {
            tracing::error!(error = %e, title = %draft.title, "Error adding game");
            return Err(e.into());
        }
        tracing::info!(title = %draft.title, category = %draft.category, "Game created");
        self.resync().await;
        Ok(())
    }

    /// Apply `patch` to game `id` in the store, then re-fetch.
    pub async fn update(&self, id: EntryId, patch: &GameUpdate) -> Result<(), CatalogError> {
        if let Err(e) = self.store.update_game(id, patch).await {
            tracing::error!(error = %e, game_id = %id, "Error updating game");
            return Err(e.into());
        }
        tracing::info!(game_id = %id, "Game updated");
        self.resync().await;
        Ok(())
    }

    /// Delete game `id` from the store, then re-fetch.
    pub async fn delete(&self, id: EntryId) -> Result<(), CatalogError> {
        if let Err(e) = self.store.delete_game(id).await {
            tracing::error!(error = %e, game_id = %id, "Error deleting game");
            return Err(e.into());
        }
        tracing::info!(game_id = %id, "Game deleted");
        self.resync().await;
        Ok(())
    }

    /// Follow-up fetch after a successful mutation. A failure here is logged
    /// by `fetch_all` and leaves the stale mirror in place; the mutation
    /// itself still succeeded.
    async fn resync(&self) {
        let _ = self.fetch_all().await;
    }

    // -----------------------------------------------------------------------
    // Read-only access
    // -----------------------------------------------------------------------

    /// Entries from the last successful fetch, newest first.
    pub fn entries(&self) -> Arc<Vec<Game>> {
        Arc::clone(&self.state.borrow().games)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    pub fn find(&self, id: EntryId) -> Option<Game> {
        self.state.borrow().games.iter().find(|g| g.id == id).cloned()
    }

    /// Filtered view of the mirror, in mirror order.
    pub fn search(&self, query: &GameQuery) -> Vec<Game> {
        query.apply(&self.entries())
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_games(&self.entries())
    }

    /// Probe the store without touching the mirror.
    pub async fn check_store(&self) -> Result<(), CatalogError> {
        self.store.health_check().await?;
        Ok(())
    }
}
