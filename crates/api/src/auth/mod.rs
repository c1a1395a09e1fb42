//! Authentication primitives.
//!
//! - [`session`] -- verification of session tokens issued by the remote store.

pub mod session;
