//! Slide layout enumeration and the per-slide working entry.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four slide templates the generation service supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    Title,
    BulletPoints,
    TwoColumn,
    ContentWithImage,
}

/// Layout used to fill newly appended slides during synchronization.
pub const DEFAULT_LAYOUT: SlideLayout = SlideLayout::BulletPoints;

/// All supported layouts, in picker display order.
pub const ALL_LAYOUTS: [SlideLayout; 4] = [
    SlideLayout::Title,
    SlideLayout::BulletPoints,
    SlideLayout::TwoColumn,
    SlideLayout::ContentWithImage,
];

impl SlideLayout {
    /// Parse a wire-format layout string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "title" => Ok(Self::Title),
            "bullet_points" => Ok(Self::BulletPoints),
            "two_column" => Ok(Self::TwoColumn),
            "content_with_image" => Ok(Self::ContentWithImage),
            _ => Err(CoreError::UnknownLayout(s.to_string())),
        }
    }

    /// Wire-format name, the inverse of [`parse`](Self::parse).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::BulletPoints => "bullet_points",
            Self::TwoColumn => "two_column",
            Self::ContentWithImage => "content_with_image",
        }
    }

    /// Human-readable label for layout pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title Slide",
            Self::BulletPoints => "Bullet Points",
            Self::TwoColumn => "Two-Column Layout",
            Self::ContentWithImage => "Content with Image",
        }
    }
}

/// One entry of the per-slide configuration list.
///
/// Position in the list is the slide index, so entries must only ever
/// be appended or removed at the tail (see [`crate::sync`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutChoice {
    pub value: SlideLayout,
}

impl LayoutChoice {
    pub fn new(value: SlideLayout) -> Self {
        Self { value }
    }
}

impl From<SlideLayout> for LayoutChoice {
    fn from(value: SlideLayout) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn parse_round_trips_every_layout() {
        for layout in ALL_LAYOUTS {
            assert_eq!(SlideLayout::parse(layout.as_str()).unwrap(), layout);
        }
    }

    #[test]
    fn parse_rejects_unknown_layout() {
        assert_matches!(
            SlideLayout::parse("freeform"),
            Err(CoreError::UnknownLayout(s)) if s == "freeform"
        );
        assert_matches!(SlideLayout::parse(""), Err(CoreError::UnknownLayout(_)));
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_value(SlideLayout::BulletPoints).unwrap(),
            json!("bullet_points")
        );
        assert_eq!(
            serde_json::to_value(SlideLayout::ContentWithImage).unwrap(),
            json!("content_with_image")
        );
    }

    #[test]
    fn choice_wraps_and_unwraps_losslessly() {
        let values = vec![SlideLayout::Title, SlideLayout::TwoColumn];
        let wrapped: Vec<LayoutChoice> = values.iter().copied().map(LayoutChoice::from).collect();
        let unwrapped: Vec<SlideLayout> = wrapped.iter().map(|c| c.value).collect();
        assert_eq!(unwrapped, values);
    }
}
