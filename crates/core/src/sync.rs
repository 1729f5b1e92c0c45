//! Slide-count / layout-list synchronization.
//!
//! The layout list must always have exactly as many entries as the
//! slide-count field asks for. This module is the one place that
//! resizes the list; callers re-run it after every slide-count change
//! and after hydration.

use crate::layout::{LayoutChoice, DEFAULT_LAYOUT};

/// Resize `current` to exactly `desired` entries.
///
/// Growing appends [`DEFAULT_LAYOUT`] entries; shrinking drops entries
/// from the tail. The surviving prefix is never touched, so a user's
/// per-slide edits are preserved for every slide position that still
/// exists. Idempotent for a fixed `desired`.
pub fn sync_layouts(current: &[LayoutChoice], desired: usize) -> Vec<LayoutChoice> {
    let mut next = current.to_vec();
    next.resize(desired, LayoutChoice::new(DEFAULT_LAYOUT));
    next
}
