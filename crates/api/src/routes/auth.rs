use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes mounted at `/auth`.
///
/// ```text
/// GET /me  -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(auth::me))
}
