//! Item model and creation command.

use chrono::{DateTime, Utc};
use common::ItemId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Description given to created items that did not provide one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// A named record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,

    /// Set only on items returned from a creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates an item without a creation timestamp.
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at: None,
        }
    }

    /// Stamps the item with its creation time.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

/// Command to create an item.
///
/// `name` is optional here so a missing name surfaces as
/// [`CatalogError::NameRequired`](crate::CatalogError::NameRequired)
/// rather than as a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewItem {
    /// Creates a command with a name and no description.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
