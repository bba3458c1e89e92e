//! Catalog error types.

use common::ItemId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// The display strings are returned to HTTP clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No item with this id exists.
    #[error("Item not found")]
    ItemNotFound { id: ItemId },

    /// A creation request did not carry a name.
    #[error("Name is required")]
    NameRequired,
}
