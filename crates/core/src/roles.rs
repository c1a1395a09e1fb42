//! Well-known role name constants.
//!
//! The role is issued by the external identity provider in the session
//! token's `app_metadata.role` claim; this service only compares against it.

pub const ROLE_ADMIN: &str = "admin";
