//! Entrance animation parameters for list items.
//!
//! Items fade in with a fixed duration and a per-index stagger. The browser
//! runs the keyframes (`collection-item-enter` in the stylesheet); this module
//! only computes the timing that is written to each item's inline style.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Fade-in duration for every item.
pub const ENTER_DURATION_MS: u32 = 200;

/// Extra delay added per list position.
pub const ENTER_STAGGER_MS: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceAnimation {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl EntranceAnimation {
    /// Timing for the item at `index` in list order.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            duration_ms: ENTER_DURATION_MS,
            delay_ms: index.saturating_mul(ENTER_STAGGER_MS),
        }
    }

    /// Inline CSS declarations for this timing.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}
