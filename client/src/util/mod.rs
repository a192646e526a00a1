//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep timing and lifecycle bookkeeping out of page and
//! component code so it can be unit tested without a browser.

pub mod animation;
pub mod lifecycle;
