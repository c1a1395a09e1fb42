//! Handlers for catalog administration.
//!
//! Every mutation is validated here, before the remote store is contacted.
//! Updates and deletes go to the store even when the local listing has not
//! seen the id yet; the store decides whether it exists. On success the
//! catalog has already re-fetched, and the response carries the refreshed
//! entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::stats::CatalogStats;
use gamehub_core::types::EntryId;
use gamehub_core::validation::{validate_draft, validate_update};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::DeleteParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Admin dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: CatalogStats,
    pub admin_email: String,
    pub games: Vec<Game>,
}

fn current_entries(state: &AppState) -> Vec<Game> {
    state.catalog.entries().to_vec()
}

/// GET /api/v1/admin/dashboard
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: DashboardResponse {
            stats: state.catalog.stats(),
            admin_email: admin.email,
            games: current_entries(&state),
        },
    }))
}

/// POST /api/v1/admin/games
pub async fn create_game(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<GameDraft>,
) -> AppResult<impl IntoResponse> {
    validate_draft(&input)?;

    state.catalog.create(&input).await?;

    tracing::info!(
        title = %input.title,
        user_id = %admin.user_id,
        "Game added to catalog",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: current_entries(&state),
        }),
    ))
}

/// PUT /api/v1/admin/games/{id}
///
/// Partially update an entry; absent fields keep their values.
pub async fn update_game(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(input): Json<GameUpdate>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    state.catalog.update(id, &input).await?;

    tracing::info!(game_id = %id, user_id = %admin.user_id, "Game updated");

    Ok(Json(DataResponse {
        data: current_entries(&state),
    }))
}

/// DELETE /api/v1/admin/games/{id}?confirm=true
///
/// Without `confirm=true` nothing is deleted and the response asks for
/// confirmation, naming the entry.
pub async fn delete_game(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let title = state.catalog.find(id).map(|game| game.title);
    if !params.confirm {
        let name = match &title {
            Some(title) => format!("\"{title}\""),
            None => format!("game {id}"),
        };
        return Err(AppError::BadRequest(format!(
            "Deleting {name} cannot be undone. Repeat the request with confirm=true"
        )));
    }

    state.catalog.delete(id).await?;

    tracing::info!(
        game_id = %id,
        title = title.as_deref().unwrap_or_default(),
        user_id = %admin.user_id,
        "Game deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/games/refresh
pub async fn refresh_games(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let games = state.catalog.fetch_all().await?;
    Ok(Json(DataResponse {
        data: games.to_vec(),
    }))
}
