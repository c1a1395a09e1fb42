use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::types::EntryId;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Profile of the signed-in user.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: EntryId,
    pub email: String,
    pub is_admin: bool,
}

/// GET /api/v1/auth/me
pub async fn me(user: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ProfileResponse {
            user_id: user.user_id,
            email: user.email,
            is_admin: user.is_admin,
        },
    }))
}
