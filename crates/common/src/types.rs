use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a catalog item.
///
/// Wraps the integer id so item ids cannot be mixed up with counts
/// or other integers flowing through the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Creates an item id from a raw integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
