//! Domain types and pure logic for the game catalog.
//!
//! This crate has no I/O: everything here can be used by the store
//! backends, the catalog service and the HTTP layer alike.

pub mod categories;
pub mod error;
pub mod filter;
pub mod game;
pub mod roles;
pub mod stats;
pub mod types;
pub mod validation;
