//! Render model for the result area of a form.

use deckgen_client::config::ServiceConfig;
use deckgen_core::types::PresentationId;

use crate::state::FlowState;

/// What the result area should render. The four states are mutually
/// exclusive; `Success` carries ready-to-use hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Initial fetch or a submission is in flight.
    Loading,
    /// Something failed. Non-dismissible errors replace the form
    /// (modify-flow load failures); dismissible ones render above the
    /// still-editable form.
    Error { message: String, dismissible: bool },
    /// Nothing to show yet.
    Idle,
    /// A presentation is ready to download.
    Success {
        id: PresentationId,
        /// Absolute download URL, resolved against the service origin.
        download_href: String,
        /// Client-side route to the detail view.
        detail_href: String,
    },
}

/// Derive the result view from the flow state.
pub fn present(state: &FlowState, config: &ServiceConfig) -> ResultView {
    match state {
        FlowState::Hydrating | FlowState::Submitting => ResultView::Loading,
        FlowState::Idle => ResultView::Idle,
        FlowState::Failed { message, fatal } => ResultView::Error {
            message: message.clone(),
            dismissible: !fatal,
        },
        FlowState::Success(record) => ResultView::Success {
            id: record.id.clone(),
            download_href: config.resolve_download(&record.download_path),
            detail_href: format!("/presentations/{}", record.id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgen_core::layout::SlideLayout;
    use deckgen_core::record::{PresentationRecord, PresentationStatus};

    fn config() -> ServiceConfig {
        ServiceConfig::new("http://localhost:5000")
    }

    fn record() -> PresentationRecord {
        PresentationRecord {
            id: "9b2f".to_string(),
            topic: "AI Ethics".to_string(),
            slide_count: 1,
            theme: "default".to_string(),
            layouts: vec![SlideLayout::Title],
            status: PresentationStatus::Created,
            download_path: "/api/v1/presentations/9b2f/download".to_string(),
        }
    }

    #[test]
    fn in_flight_states_render_loading() {
        assert_eq!(present(&FlowState::Hydrating, &config()), ResultView::Loading);
        assert_eq!(present(&FlowState::Submitting, &config()), ResultView::Loading);
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(present(&FlowState::Idle, &config()), ResultView::Idle);
    }

    #[test]
    fn fatal_failures_are_not_dismissible() {
        let view = present(
            &FlowState::Failed {
                message: "Presentation not found".to_string(),
                fatal: true,
            },
            &config(),
        );
        assert_eq!(
            view,
            ResultView::Error {
                message: "Presentation not found".to_string(),
                dismissible: false,
            }
        );
    }

    #[test]
    fn submit_failures_are_dismissible() {
        let view = present(
            &FlowState::Failed {
                message: "internal".to_string(),
                fatal: false,
            },
            &config(),
        );
        assert_eq!(
            view,
            ResultView::Error {
                message: "internal".to_string(),
                dismissible: true,
            }
        );
    }

    #[test]
    fn success_resolves_the_download_and_detail_links() {
        let view = present(&FlowState::Success(record()), &config());
        assert_eq!(
            view,
            ResultView::Success {
                id: "9b2f".to_string(),
                download_href: "http://localhost:5000/api/v1/presentations/9b2f/download"
                    .to_string(),
                detail_href: "/presentations/9b2f".to_string(),
            }
        );
    }
}
