//! Server-authored presentation record, in domain form.
//!
//! The wire shape (bare layout strings, `num_slides` field name) lives
//! in `deckgen-client`; conversion into this type rejects values
//! outside the supported enumerations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::SlideLayout;
use crate::types::PresentationId;

/// Lifecycle tag the service attaches to a stored presentation.
///
/// `created` after the initial generation, `updated` after a
/// reconfigure. The download is available in both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStatus {
    Created,
    Updated,
}

impl PresentationStatus {
    /// Parse a status string from the service.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// A presentation as persisted by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRecord {
    pub id: PresentationId,
    pub topic: String,
    pub slide_count: u32,
    pub theme: String,
    /// One layout per slide, in slide order.
    pub layouts: Vec<SlideLayout>,
    pub status: PresentationStatus,
    /// Relative download path; resolve against the service origin
    /// before handing it to a browser.
    pub download_path: String,
}
