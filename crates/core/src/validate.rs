//! Submission gating.
//!
//! All rules are evaluated on every call and failures are field-scoped
//! rather than exceptions, so a UI can surface each message next to
//! the offending input. A successful validation yields the
//! [`PresentationRequest`] that goes to the adapter; violations never
//! reach the network layer.

use validator::Validate;

use crate::form::FormSnapshot;
use crate::request::{PresentationRequest, MAX_SLIDES, MIN_SLIDES};

/// A single field-level rule violation.
///
/// `field` is a path into the form, e.g. `topic`, `slide_count`, or
/// `layouts[2].value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// First violation message recorded for `field`, if any.
pub fn message_for<'a>(violations: &'a [FieldViolation], field: &str) -> Option<&'a str> {
    violations
        .iter()
        .find(|v| v.field == field)
        .map(|v| v.message.as_str())
}

/// Check every rule against a form snapshot.
///
/// Layout membership is structural here (the list holds enum values;
/// unknown strings are rejected at the wire boundary before they can
/// enter the form), so the list checks left to this gate are the
/// count/list agreement and the scalar constraints.
pub fn validate(snapshot: &FormSnapshot) -> Result<PresentationRequest, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if let Err(errors) = Validate::validate(snapshot) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid"));
                violations.push(FieldViolation::new(field.to_string(), message));
            }
        }
    }

    let slide_count = match snapshot.slide_count.trim().parse::<i64>() {
        Err(_) => {
            violations.push(FieldViolation::new(
                "slide_count",
                "Number of slides must be a number",
            ));
            None
        }
        Ok(n) if n < MIN_SLIDES as i64 => {
            violations.push(FieldViolation::new("slide_count", "Minimum 1 slide"));
            None
        }
        Ok(n) if n > MAX_SLIDES as i64 => {
            violations.push(FieldViolation::new("slide_count", "Maximum 20 slides"));
            None
        }
        Ok(n) => Some(n as u32),
    };

    if let Some(count) = slide_count {
        if snapshot.layouts.len() != count as usize {
            violations.push(FieldViolation::new(
                "layouts",
                "Slide layouts are out of sync with the slide count",
            ));
        }
    }

    match (violations.is_empty(), slide_count) {
        (true, Some(count)) => Ok(PresentationRequest {
            topic: snapshot.topic.clone(),
            slide_count: count,
            theme: snapshot.theme.clone(),
            layouts: snapshot.layouts.clone(),
        }),
        _ => Err(violations),
    }
}
