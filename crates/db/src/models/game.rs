//! Row model for the `games` table.

use gamehub_core::game::Game;
use gamehub_core::types::{EntryId, Timestamp};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub download_url: String,
    pub category: String,
    pub file_size: String,
    pub created_at: Timestamp,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            download_url: row.download_url,
            category: row.category,
            file_size: row.file_size,
            created_at: row.created_at,
        }
    }
}
