//! Catalog access for the game hub.
//!
//! - [`store`] -- the remote store contract and its backends.
//! - [`catalog`] -- the [`Catalog`] component owning the in-process mirror.

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::{Catalog, CatalogSnapshot, SyncState};
pub use error::CatalogError;
