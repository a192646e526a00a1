//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the sidebar from `CollectionsState` projections and
//! report pointer input back to the page as `CollectionsEvent`s.

pub mod collection_item;
pub mod sidebar;
