//! Wire-format DTOs for the presentation service.
//!
//! The service speaks `num_slides` and bare layout strings; the form
//! works with [`LayoutChoice`] entries and typed enums. Conversion in
//! both directions is lossless over the supported enumerations, and
//! unknown strings coming back from the service are rejected instead
//! of silently entering the form.

use serde::{Deserialize, Serialize};

use deckgen_core::error::CoreError;
use deckgen_core::layout::{LayoutChoice, SlideLayout};
use deckgen_core::record::{PresentationRecord, PresentationStatus};
use deckgen_core::request::PresentationRequest;

/// Request body for `POST /presentations` and
/// `POST /presentations/{id}/configure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationPayload {
    pub topic: String,
    pub num_slides: u32,
    pub theme: String,
    /// Bare layout values, one per slide.
    pub layouts: Vec<SlideLayout>,
}

impl From<&PresentationRequest> for PresentationPayload {
    fn from(request: &PresentationRequest) -> Self {
        Self {
            topic: request.topic.clone(),
            num_slides: request.slide_count,
            theme: request.theme.clone(),
            layouts: request.layouts.iter().map(|choice| choice.value).collect(),
        }
    }
}

/// Record shape shared by all three endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDto {
    pub id: String,
    pub topic: String,
    pub num_slides: u32,
    pub theme: String,
    pub layouts: Vec<String>,
    pub status: String,
    pub download_url: String,
}

impl RecordDto {
    /// Convert into the domain record, rejecting unknown layout or
    /// status strings.
    pub fn into_record(self) -> Result<PresentationRecord, CoreError> {
        let layouts = self
            .layouts
            .iter()
            .map(|value| SlideLayout::parse(value))
            .collect::<Result<Vec<_>, _>>()?;
        let status = PresentationStatus::parse(&self.status)?;
        Ok(PresentationRecord {
            id: self.id,
            topic: self.topic,
            slide_count: self.num_slides,
            theme: self.theme,
            layouts,
            status,
            download_path: self.download_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn request() -> PresentationRequest {
        PresentationRequest {
            topic: "AI Ethics".to_string(),
            slide_count: 3,
            theme: "default".to_string(),
            layouts: vec![
                LayoutChoice::new(SlideLayout::Title),
                LayoutChoice::new(SlideLayout::BulletPoints),
                LayoutChoice::new(SlideLayout::TwoColumn),
            ],
        }
    }

    fn dto() -> RecordDto {
        RecordDto {
            id: "9b2f".to_string(),
            topic: "AI Ethics".to_string(),
            num_slides: 3,
            theme: "default".to_string(),
            layouts: vec![
                "title".to_string(),
                "bullet_points".to_string(),
                "two_column".to_string(),
            ],
            status: "created".to_string(),
            download_url: "/api/v1/presentations/9b2f/download".to_string(),
        }
    }

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let payload = PresentationPayload::from(&request());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "topic": "AI Ethics",
                "num_slides": 3,
                "theme": "default",
                "layouts": ["title", "bullet_points", "two_column"],
            })
        );
    }

    #[test]
    fn record_dto_converts_losslessly() {
        let record = dto().into_record().unwrap();
        assert_eq!(record.id, "9b2f");
        assert_eq!(record.slide_count, 3);
        assert_eq!(
            record.layouts,
            vec![
                SlideLayout::Title,
                SlideLayout::BulletPoints,
                SlideLayout::TwoColumn,
            ]
        );
        assert_eq!(record.status, PresentationStatus::Created);
        assert_eq!(record.download_path, "/api/v1/presentations/9b2f/download");
    }

    #[test]
    fn unknown_layout_in_a_record_is_rejected() {
        let mut bad = dto();
        bad.layouts[1] = "freeform".to_string();
        assert_matches!(bad.into_record(), Err(CoreError::UnknownLayout(s)) if s == "freeform");
    }

    #[test]
    fn unknown_status_in_a_record_is_rejected() {
        let mut bad = dto();
        bad.status = "pending".to_string();
        assert_matches!(bad.into_record(), Err(CoreError::UnknownStatus(_)));
    }

    #[test]
    fn payload_round_trips_the_form_layout_values() {
        let payload = PresentationPayload::from(&request());
        let back: Vec<SlideLayout> = payload
            .layouts
            .iter()
            .map(|layout| SlideLayout::parse(layout.as_str()).unwrap())
            .collect();
        let original: Vec<SlideLayout> = request().layouts.iter().map(|c| c.value).collect();
        assert_eq!(back, original);
    }
}
