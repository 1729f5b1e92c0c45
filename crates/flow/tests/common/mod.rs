//! Shared test fixtures: a recording fake for the presentation
//! service, so flow behavior can be asserted without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use deckgen_client::api::ApiError;
use deckgen_client::service::PresentationService;
use deckgen_core::layout::SlideLayout;
use deckgen_core::record::{PresentationRecord, PresentationStatus};
use deckgen_core::request::PresentationRequest;

/// One recorded call against the mock service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    Fetch(String),
    Create(PresentationRequest),
    Update(String, PresentationRequest),
}

/// Recording fake for [`PresentationService`]. Queued responses are
/// consumed in FIFO order regardless of which operation was invoked;
/// running out fails the test.
pub struct MockService {
    calls: Mutex<Vec<ServiceCall>>,
    responses: Mutex<VecDeque<Result<PresentationRecord, ApiError>>>,
}

impl MockService {
    pub fn new(responses: Vec<Result<PresentationRecord, ApiError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: ServiceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_response(&self) -> Result<PresentationRecord, ApiError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock service ran out of queued responses")
    }
}

#[async_trait]
impl PresentationService for MockService {
    async fn fetch(&self, id: &str) -> Result<PresentationRecord, ApiError> {
        self.record_call(ServiceCall::Fetch(id.to_string()));
        self.next_response()
    }

    async fn create(&self, request: &PresentationRequest) -> Result<PresentationRecord, ApiError> {
        self.record_call(ServiceCall::Create(request.clone()));
        self.next_response()
    }

    async fn update(
        &self,
        id: &str,
        request: &PresentationRequest,
    ) -> Result<PresentationRecord, ApiError> {
        self.record_call(ServiceCall::Update(id.to_string(), request.clone()));
        self.next_response()
    }
}

/// The record the service would persist for `request`.
pub fn record_for(
    request: &PresentationRequest,
    id: &str,
    status: PresentationStatus,
) -> PresentationRecord {
    PresentationRecord {
        id: id.to_string(),
        topic: request.topic.clone(),
        slide_count: request.slide_count,
        theme: request.theme.clone(),
        layouts: request.layouts.iter().map(|choice| choice.value).collect(),
        status,
        download_path: format!("/api/v1/presentations/{id}/download"),
    }
}

/// A stored presentation with one of each layout, for modify flows.
pub fn stored_record(id: &str) -> PresentationRecord {
    PresentationRecord {
        id: id.to_string(),
        topic: "Quarterly review".to_string(),
        slide_count: 4,
        theme: "dark".to_string(),
        layouts: vec![
            SlideLayout::Title,
            SlideLayout::BulletPoints,
            SlideLayout::TwoColumn,
            SlideLayout::ContentWithImage,
        ],
        status: PresentationStatus::Created,
        download_path: format!("/api/v1/presentations/{id}/download"),
    }
}
