//! The validated request snapshot submitted for generation.

use crate::layout::LayoutChoice;

/// Smallest slide count the service accepts.
pub const MIN_SLIDES: u32 = 1;

/// Largest slide count the service accepts.
pub const MAX_SLIDES: u32 = 20;

/// Themes the service ships styles for. The form only requires a
/// non-empty theme; pickers should offer these.
pub const SUPPORTED_THEMES: [&str; 3] = ["default", "dark", "light"];

/// Theme pre-selected on a fresh form.
pub const DEFAULT_THEME: &str = "default";

/// A fully validated presentation request.
///
/// Only [`crate::validate::validate`] produces one of these, so
/// holding a `PresentationRequest` means the field constraints and the
/// count/list agreement already hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRequest {
    pub topic: String,
    pub slide_count: u32,
    pub theme: String,
    /// Exactly `slide_count` entries, in slide order.
    pub layouts: Vec<LayoutChoice>,
}
