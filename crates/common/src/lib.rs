//! Shared types for the items API.

pub mod types;

pub use types::ItemId;
