//! Item catalog for the items API.
//!
//! This crate provides:
//! - The `Item` model and the `NewItem` creation command
//! - `Catalog`, holding the three well-known items
//! - `CatalogError` for lookups and creations that cannot be served

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::{CREATED_ITEM_ID, Catalog};
pub use error::CatalogError;
pub use item::{DEFAULT_DESCRIPTION, Item, NewItem};
