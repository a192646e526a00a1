//! Mount-scoped guards for the page's one-shot load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page issues its fetch from a mount effect and applies the result from
//! a spawned task. `OnceGuard` keeps the effect from fetching twice if it
//! re-runs; `MountFlag` lets the task drop a result that arrives after the
//! page was torn down.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Grants exactly one successful claim across all clones.
#[derive(Clone, Debug, Default)]
pub struct OnceGuard {
    claimed: Arc<AtomicBool>,
}

impl OnceGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller only.
    pub fn try_claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}

/// Shared "still mounted" bit, cleared once from `on_cleanup`.
#[derive(Clone, Debug)]
pub struct MountFlag {
    alive: Arc<AtomicBool>,
}

impl Default for MountFlag {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
