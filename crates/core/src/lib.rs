//! Domain layer for the layout catalog.
//!
//! This crate has zero internal dependencies so it can be used by the
//! storage layer, the API crate, and any future CLI tooling alike. It owns
//! the entity types, the query engine (search predicate, sorting, stat
//! aggregation), and interaction input validation.

pub mod error;
pub mod interaction;
pub mod layout;
pub mod query;
pub mod stats;
pub mod types;
