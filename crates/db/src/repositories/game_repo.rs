//! Repository for the `games` table.

use gamehub_core::game::{GameDraft, GameUpdate};
use gamehub_core::types::EntryId;
use sqlx::PgPool;

use crate::models::game::GameRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, image_url, download_url, category, file_size, created_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row. `id` and `created_at`
    /// come from the column defaults.
    pub async fn create(pool: &PgPool, input: &GameDraft) -> Result<GameRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, description, image_url, download_url, category, file_size)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.download_url)
            .bind(&input.category)
            .bind(&input.file_size)
            .fetch_one(pool)
            .await
    }

    /// List all games ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GameRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY created_at DESC, id");
        sqlx::query_as::<_, GameRow>(&query).fetch_all(pool).await
    }

    /// Update a game. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntryId,
        input: &GameUpdate,
    ) -> Result<Option<GameRow>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                download_url = COALESCE($5, download_url),
                category = COALESCE($6, category),
                file_size = COALESCE($7, file_size)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.download_url)
            .bind(&input.category)
            .bind(&input.file_size)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a game by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntryId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            tracing::debug!(game_id = %id, "Game row deleted");
        }
        Ok(result.rows_affected() > 0)
    }
}
