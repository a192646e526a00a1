//! Wire DTOs for the static collections payload.
//!
//! DESIGN
//! ======
//! The envelope is decoded into typed structs rather than walked as loose JSON,
//! so a missing `data` or `collections` field fails the load instead of
//! rendering an empty list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A named grouping of items as served by the data provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Opaque unique identifier.
    pub collection_id: String,
    /// Display name.
    pub name: String,
    /// Cached item count. Absent or `null` in the payload decodes as `None`.
    #[serde(default)]
    pub item_count: Option<u64>,
    /// Visibility flag. Part of the schema contract; not used for rendering.
    pub is_public: bool,
}

impl Collection {
    /// Item count with the missing-count fallback applied.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.item_count.unwrap_or(0)
    }
}

/// Top-level `{ "data": { ... } }` envelope of `/data/raw.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsEnvelope {
    pub data: CollectionsData,
}

/// The `data` object of the envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsData {
    pub collections: Vec<Collection>,
}
