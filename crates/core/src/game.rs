//! The catalog entry entity and its client-side DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{EntryId, Timestamp};

/// A downloadable game as stored by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub download_url: String,
    pub category: String,
    pub file_size: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new game. Never carries `id` or `created_at`; both are
/// assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub download_url: String,
    pub category: String,
    pub file_size: String,
}

/// DTO for updating an existing game. All fields are optional; absent fields
/// keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

impl Game {
    /// Build a stored game from a draft plus the store-assigned fields.
    pub fn from_draft(id: EntryId, created_at: Timestamp, draft: &GameDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            download_url: draft.download_url.clone(),
            category: draft.category.clone(),
            file_size: draft.file_size.clone(),
            created_at,
        }
    }
}

impl GameUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.download_url.is_none()
            && self.category.is_none()
            && self.file_size.is_none()
    }

    /// Apply the present fields to `game`. `id` and `created_at` are untouched.
    pub fn apply_to(&self, game: &mut Game) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(description) = &self.description {
            game.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            game.image_url = image_url.clone();
        }
        if let Some(download_url) = &self.download_url {
            game.download_url = download_url.clone();
        }
        if let Some(category) = &self.category {
            game.category = category.clone();
        }
        if let Some(file_size) = &self.file_size {
            game.file_size = file_size.clone();
        }
    }
}
