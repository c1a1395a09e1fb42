//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in user from a session Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the identity provider's `admin` role.

pub mod auth;
pub mod rbac;
