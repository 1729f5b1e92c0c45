//! Single source of truth for one presentation form.
//!
//! [`FormState`] owns the four request fields and keeps the layout
//! list in lockstep with the slide-count field via [`crate::sync`].
//! It never validates; submission gating is [`crate::validate`]'s job,
//! which is why the raw slide-count input is kept as typed.

use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;
use crate::layout::{LayoutChoice, SlideLayout};
use crate::record::PresentationRecord;
use crate::request::DEFAULT_THEME;
use crate::sync::sync_layouts;

/// Slide count a fresh form starts with, and the fallback target when
/// the very first slide-count input fails to parse.
pub const BASELINE_SLIDE_COUNT: u32 = 5;

/// Working state of a presentation form.
#[derive(Debug, Clone)]
pub struct FormState {
    topic: String,
    /// Slide-count field exactly as the user typed it. Validated only
    /// at submit time.
    slide_count_input: String,
    /// Last successfully parsed slide count; drives synchronization.
    /// Deliberately unclamped so the visible list always matches what
    /// the user typed, even out of range.
    sync_target: u32,
    theme: String,
    layouts: Vec<LayoutChoice>,
}

/// Immutable copy of the form fields, taken at submission time.
///
/// Scalar presence constraints are declared here; [`crate::validate`]
/// folds them together with the slide-count and layout-list checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct FormSnapshot {
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
    /// Raw slide-count input, not yet coerced.
    pub slide_count: String,
    #[validate(length(min = 1, message = "Theme is required"))]
    pub theme: String,
    pub layouts: Vec<LayoutChoice>,
}

impl FormState {
    /// Fresh create-flow form: empty topic, baseline slide count,
    /// default theme, layout list already synchronized.
    pub fn new() -> Self {
        let mut state = Self {
            topic: String::new(),
            slide_count_input: BASELINE_SLIDE_COUNT.to_string(),
            sync_target: BASELINE_SLIDE_COUNT,
            theme: DEFAULT_THEME.to_string(),
            layouts: Vec::new(),
        };
        state.resync();
        state
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The slide-count field as currently typed.
    pub fn slide_count_input(&self) -> &str {
        &self.slide_count_input
    }

    /// The count the layout list is synchronized to.
    pub fn sync_target(&self) -> u32 {
        self.sync_target
    }

    pub fn layouts(&self) -> &[LayoutChoice] {
        &self.layouts
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// Update the slide-count field and resynchronize the layout list.
    ///
    /// Any parseable integer becomes the new sync target, even out of
    /// range (range enforcement happens at submit time); negative
    /// input bottoms out at zero. Unparseable input keeps the previous
    /// target so the list stays where it was.
    pub fn set_slide_count(&mut self, raw: &str) {
        self.slide_count_input = raw.to_string();
        if let Ok(n) = raw.trim().parse::<i64>() {
            self.sync_target = n.max(0) as u32;
        }
        self.resync();
    }

    /// Update exactly one entry of the layout list.
    pub fn set_layout_at(&mut self, index: usize, layout: SlideLayout) -> Result<(), CoreError> {
        match self.layouts.get_mut(index) {
            Some(entry) => {
                entry.value = layout;
                Ok(())
            }
            None => Err(CoreError::IndexOutOfRange {
                index,
                len: self.layouts.len(),
            }),
        }
    }

    /// Replace the entire working state from a fetched record, then
    /// resynchronize.
    ///
    /// The record's declared `slide_count` becomes the sync target, so
    /// a record whose layout list disagrees with its own count is
    /// repaired toward the count. When they agree (the normal case)
    /// the resync is a no-op and the fetched selections are shown
    /// exactly as stored.
    pub fn hydrate(&mut self, record: &PresentationRecord) {
        self.topic = record.topic.clone();
        self.slide_count_input = record.slide_count.to_string();
        self.sync_target = record.slide_count;
        self.theme = record.theme.clone();
        self.layouts = record.layouts.iter().copied().map(LayoutChoice::new).collect();
        self.resync();
    }

    /// Immutable copy of the current state for submission. Does not
    /// validate.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            topic: self.topic.clone(),
            slide_count: self.slide_count_input.clone(),
            theme: self.theme.clone(),
            layouts: self.layouts.clone(),
        }
    }

    fn resync(&mut self) {
        self.layouts = sync_layouts(&self.layouts, self.sync_target as usize);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
