pub mod admin;
pub mod auth;
pub mod games;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                          public listing (?search=&category=)
/// /games/{id}                     one entry
/// /games/{id}/download            redirect to the download URL
/// /categories                     category selector options
///
/// /auth/me                        profile (requires session)
///
/// /admin/dashboard                stats and entries (admin only)
/// /admin/games                    create (POST)
/// /admin/games/refresh            re-fetch the catalog (POST)
/// /admin/games/{id}               update (PUT), delete (DELETE, ?confirm=true)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .route("/categories", get(handlers::games::list_categories))
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
