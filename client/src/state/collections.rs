//! Collection sidebar view state: load lifecycle plus pointer selection.
//!
//! DESIGN
//! ======
//! The load lifecycle is an enum rather than `loading`/`error` flags, so the
//! "exactly one of loading, failed, ready" rule holds by construction.
//! Transitions consume the old state and return the new one; callers holding
//! the state in a signal replace it wholesale.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use crate::net::api::LoadError;
use crate::net::types::Collection;

/// Sidebar state for one mounted page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CollectionsState {
    /// Fetch issued, not yet settled.
    #[default]
    Loading,
    /// Fetch settled with an error; terminal.
    Failed(String),
    /// Fetch settled with a list; pointer events now apply.
    Ready(ReadyState),
}

/// Loaded collections plus the current selection and hover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadyState {
    pub collections: Vec<Collection>,
    pub active_item: Option<String>,
    pub hovered_item: Option<String>,
}

/// Inputs that drive [`CollectionsState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionsEvent {
    LoadSucceeded(Vec<Collection>),
    LoadFailed(String),
    Clicked(String),
    PointerEntered(String),
    PointerLeft(String),
}

impl CollectionsEvent {
    /// Map the loader outcome onto the matching load event.
    #[must_use]
    pub fn from_load_result(result: Result<Vec<Collection>, LoadError>) -> Self {
        match result {
            Ok(collections) => Self::LoadSucceeded(collections),
            Err(e) => Self::LoadFailed(e.to_string()),
        }
    }
}

/// Coarse lifecycle phase, used to keep list rendering stable across hover
/// and selection changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Failed(String),
    Ready,
}

/// Per-item projection consumed by the sidebar components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionRow {
    pub id: String,
    pub name: String,
    pub count: u64,
    pub active: bool,
    pub hovered: bool,
}

impl CollectionRow {
    /// Secondary text under the collection name.
    #[must_use]
    pub fn count_label(&self) -> String {
        items_label(self.count)
    }
}

/// `"{n} items"`, shared by the sidebar header and each row.
#[must_use]
pub fn items_label(count: u64) -> String {
    format!("{count} items")
}

/// Text shown in place of the list after a failed load.
#[must_use]
pub fn error_banner(message: &str) -> String {
    format!("Error: {message}")
}

impl CollectionsState {
    /// Apply one event. Pairs not listed below return the state unchanged:
    ///
    /// - `Loading` + `LoadSucceeded` -> `Ready` with nothing active or hovered
    /// - `Loading` + `LoadFailed` -> `Failed`
    /// - `Ready` + `Clicked(id)` -> `active_item = id` when `id` is loaded
    /// - `Ready` + `PointerEntered(id)` -> `hovered_item = id`
    /// - `Ready` + `PointerLeft(_)` -> `hovered_item = None`
    #[must_use]
    pub fn apply(self, event: CollectionsEvent) -> Self {
        match (self, event) {
            (Self::Loading, CollectionsEvent::LoadSucceeded(collections)) => Self::Ready(ReadyState {
                collections,
                active_item: None,
                hovered_item: None,
            }),
            (Self::Loading, CollectionsEvent::LoadFailed(message)) => Self::Failed(message),
            (Self::Ready(ready), CollectionsEvent::Clicked(id)) => {
                if ready.contains(&id) {
                    Self::Ready(ReadyState { active_item: Some(id), ..ready })
                } else {
                    Self::Ready(ready)
                }
            }
            (Self::Ready(ready), CollectionsEvent::PointerEntered(id)) => {
                Self::Ready(ReadyState { hovered_item: Some(id), ..ready })
            }
            (Self::Ready(ready), CollectionsEvent::PointerLeft(_)) => {
                Self::Ready(ReadyState { hovered_item: None, ..ready })
            }
            (state, _) => state,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded collections; empty unless `Ready`.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        match self {
            Self::Ready(ready) => &ready.collections,
            _ => &[],
        }
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&str> {
        match self {
            Self::Ready(ready) => ready.active_item.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn hovered_item(&self) -> Option<&str> {
        match self {
            Self::Ready(ready) => ready.hovered_item.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        match self {
            Self::Loading => ViewPhase::Loading,
            Self::Failed(message) => ViewPhase::Failed(message.clone()),
            Self::Ready(_) => ViewPhase::Ready,
        }
    }

    /// Header summary, e.g. `"3 items"`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        items_label(self.collections().len() as u64)
    }

    /// Collection ids in list order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<String> {
        self.collections().iter().map(|c| c.collection_id.clone()).collect()
    }

    /// View model for every loaded collection, in list order.
    #[must_use]
    pub fn rows(&self) -> Vec<CollectionRow> {
        self.collections().iter().map(|c| self.project(c)).collect()
    }

    /// View model for a single collection, if loaded.
    #[must_use]
    pub fn row(&self, id: &str) -> Option<CollectionRow> {
        self.collections()
            .iter()
            .find(|c| c.collection_id == id)
            .map(|c| self.project(c))
    }

    fn project(&self, collection: &Collection) -> CollectionRow {
        let id = collection.collection_id.as_str();
        CollectionRow {
            id: id.to_owned(),
            name: collection.name.clone(),
            count: collection.count(),
            active: self.active_item() == Some(id),
            hovered: self.hovered_item() == Some(id),
        }
    }
}

impl ReadyState {
    fn contains(&self, id: &str) -> bool {
        self.collections.iter().any(|c| c.collection_id == id)
    }
}
