//! Store backend talking to PostgreSQL directly through `gamehub-db`.

use async_trait::async_trait;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::types::EntryId;
use gamehub_db::repositories::GameRepo;
use gamehub_db::DbPool;

use super::{GameStore, StoreError};

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        let rows = GameRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn insert_game(&self, draft: &GameDraft) -> Result<(), StoreError> {
        let row = GameRepo::create(&self.pool, draft).await?;
        tracing::debug!(game_id = %row.id, "Inserted game row");
        Ok(())
    }

    async fn update_game(&self, id: EntryId, patch: &GameUpdate) -> Result<(), StoreError> {
        GameRepo::update(&self.pool, id, patch)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        Ok(())
    }

    async fn delete_game(&self, id: EntryId) -> Result<(), StoreError> {
        if GameRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        gamehub_db::health_check(&self.pool).await?;
        Ok(())
    }
}
