//! In-process store backend.
//!
//! Keeps rows in a `Vec` behind a tokio `RwLock`. Ids are UUID v4 and
//! `created_at` is strictly increasing, so newest-first ordering is total
//! even when inserts land within the same clock tick.

use async_trait::async_trait;
use chrono::Utc;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::types::{EntryId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GameStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Game>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `games` (ids and timestamps kept).
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            rows: RwLock::new(games),
        }
    }

    fn next_timestamp(rows: &[Game]) -> Timestamp {
        let now = Utc::now();
        match rows.iter().map(|g| g.created_at).max() {
            Some(latest) if latest >= now => latest + chrono::Duration::microseconds(1),
            _ => now,
        }
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        let mut games = self.rows.read().await.clone();
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(games)
    }

    async fn insert_game(&self, draft: &GameDraft) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let created_at = Self::next_timestamp(&rows);
        rows.push(Game::from_draft(Uuid::new_v4(), created_at, draft));
        Ok(())
    }

    async fn update_game(&self, id: EntryId, patch: &GameUpdate) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let game = rows
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply_to(game);
        Ok(())
    }

    async fn delete_game(&self, id: EntryId) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|g| g.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn draft(title: &str) -> GameDraft {
        GameDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            image_url: "https://example.com/i.png".to_string(),
            download_url: "https://example.com/d.zip".to_string(),
            category: "Action".to_string(),
            file_size: "1 GB".to_string(),
        }
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::new();
        for title in ["one", "two", "three"] {
            store.insert_game(&draft(title)).await.unwrap();
        }
        let titles: Vec<_> = store
            .list_games()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, ["three", "two", "one"]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        let err = store
            .update_game(id, &GameUpdate::default())
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::NotFound(missing) if missing == id);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = MemoryStore::new();
        store.insert_game(&draft("keep")).await.unwrap();
        store.insert_game(&draft("drop")).await.unwrap();
        let games = store.list_games().await.unwrap();
        let drop_id = games.iter().find(|g| g.title == "drop").unwrap().id;

        store.delete_game(drop_id).await.unwrap();

        let remaining = store.list_games().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "keep");
        assert_matches!(
            store.delete_game(drop_id).await,
            Err(StoreError::NotFound(_))
        );
    }
}
