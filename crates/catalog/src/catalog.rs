//! The fixed item catalog.

use chrono::Utc;
use common::ItemId;

use crate::error::CatalogError;
use crate::item::{DEFAULT_DESCRIPTION, Item, NewItem};

/// Id assigned to every created item.
///
/// Creations are not stored, so there is no sequence to draw from.
pub const CREATED_ITEM_ID: ItemId = ItemId::new(4);

/// Read-only catalog of the three well-known items.
///
/// Nothing is persisted: lookups only ever see ids 1 to 3 and
/// [`Catalog::create`] builds a fresh item without keeping it.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates the catalog with its seed items.
    pub fn new() -> Self {
        Self {
            items: vec![
                Item::new(ItemId::new(1), "Item 1", "First example item"),
                Item::new(ItemId::new(2), "Item 2", "Second example item"),
                Item::new(ItemId::new(3), "Item 3", "Third example item"),
            ],
        }
    }

    /// Returns all items in id order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Result<&Item, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound { id })
    }

    /// Builds a new item from a creation command.
    #[tracing::instrument(skip(self))]
    pub fn create(&self, cmd: NewItem) -> Result<Item, CatalogError> {
        let name = cmd.name.ok_or(CatalogError::NameRequired)?;
        let description = cmd
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let item = Item::new(CREATED_ITEM_ID, name, description).stamped(Utc::now());

        tracing::info!(id = %item.id, name = %item.name, "created new item");
        metrics::counter!("catalog_items_created_total").increment(1);

        Ok(item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
