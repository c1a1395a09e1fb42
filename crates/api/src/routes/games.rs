use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Public catalog routes mounted at `/games`.
///
/// ```text
/// GET /                -> list_games
/// GET /{id}            -> get_game
/// GET /{id}/download   -> download_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games))
        .route("/{id}", get(games::get_game))
        .route("/{id}/download", get(games::download_game))
}
