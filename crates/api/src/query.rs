//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for destructive endpoints (`?confirm=true`).
///
/// Deletion is refused unless the caller explicitly confirms it.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}
