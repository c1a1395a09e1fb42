//! Public catalog handlers.
//!
//! Everything here reads the in-process mirror; none of these endpoints
//! contact the remote store.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::categories::{ALL_CATEGORIES, DEFAULT_CATEGORY, SUGGESTED_CATEGORIES};
use gamehub_core::error::CoreError;
use gamehub_core::filter::GameQuery;
use gamehub_core::game::Game;
use gamehub_core::types::EntryId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Public listing payload.
#[derive(Debug, Serialize)]
pub struct GameListing {
    /// Entries matching the query, newest first.
    pub games: Vec<Game>,
    /// Number of entries in the catalog before filtering.
    pub total_count: usize,
    /// True until the first fetch of the catalog has completed.
    pub loading: bool,
}

/// Options for the category selector.
#[derive(Debug, Serialize)]
pub struct CategoryOptions {
    /// Selector value meaning "no category filter".
    pub all: &'static str,
    pub suggested: &'static [&'static str],
    /// Pre-selected category for new entries.
    pub default: &'static str,
}

/// Look up a game in the mirror or fail with 404.
fn find_game(state: &AppState, id: EntryId) -> AppResult<Game> {
    state
        .catalog
        .find(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))
}

/// GET /api/v1/games?search=&category=
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.catalog.snapshot();
    let games = query.apply(&snapshot.games);

    Ok(Json(DataResponse {
        data: GameListing {
            games,
            total_count: snapshot.games.len(),
            loading: snapshot.loading,
        },
    }))
}

/// GET /api/v1/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> AppResult<impl IntoResponse> {
    let game = find_game(&state, id)?;
    Ok(Json(DataResponse { data: game }))
}

/// GET /api/v1/games/{id}/download
///
/// Temporary redirect to the entry's download URL.
///
/// Rows written by other store clients skip our validation, so a URL that
/// cannot be sent as a header is reported instead of redirected.
pub async fn download_game(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> AppResult<impl IntoResponse> {
    let game = find_game(&state, id)?;
    let location = HeaderValue::try_from(game.download_url.as_str()).map_err(|e| {
        AppError::InternalError(format!(
            "Download URL of game {id} is not a valid header value: {e}"
        ))
    })?;
    tracing::info!(game_id = %id, title = %game.title, "Download requested");
    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}

/// GET /api/v1/categories
pub async fn list_categories() -> impl IntoResponse {
    Json(DataResponse {
        data: CategoryOptions {
            all: ALL_CATEGORIES,
            suggested: SUGGESTED_CATEGORIES,
            default: DEFAULT_CATEGORY,
        },
    })
}
