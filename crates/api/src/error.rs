use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamehub_catalog::store::StoreError;
use gamehub_catalog::CatalogError;
use gamehub_core::error::CoreError;
use serde_json::json;

/// Where access-restricted responses point the client back to.
pub const PUBLIC_HOME: &str = "/";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`CatalogError`] for remote
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamehub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call to the remote store.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    return access_restricted(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg);
                }
                CoreError::Forbidden(msg) => {
                    return access_restricted(StatusCode::FORBIDDEN, "FORBIDDEN", msg);
                }
            },

            // --- Remote store failures ---
            AppError::Catalog(CatalogError::Remote(StoreError::NotFound(id))) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Game with id {id} not found"),
            ),
            AppError::Catalog(CatalogError::Remote(err)) => {
                tracing::error!(error = %err, "Remote store error");
                (
                    StatusCode::BAD_GATEWAY,
                    "REMOTE_ERROR",
                    "The remote operation failed, please try again".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Access-restricted body: the error plus a link back to the public view.
fn access_restricted(status: StatusCode, code: &str, message: &str) -> Response {
    tracing::debug!(%status, reason = %message, "Access restricted");
    let body = json!({
        "error": message,
        "code": code,
        "home": PUBLIC_HOME,
    });
    (status, axum::Json(body)).into_response()
}
