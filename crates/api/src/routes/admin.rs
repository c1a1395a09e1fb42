use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Catalog administration routes mounted at `/admin`.
///
/// ```text
/// GET    /dashboard        -> dashboard
/// POST   /games            -> create_game
/// POST   /games/refresh    -> refresh_games
/// PUT    /games/{id}       -> update_game
/// DELETE /games/{id}       -> delete_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/games", post(admin::create_game))
        .route("/games/refresh", post(admin::refresh_games))
        .route(
            "/games/{id}",
            put(admin::update_game).delete(admin::delete_game),
        )
}
