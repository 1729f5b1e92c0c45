//! Transport seam between the form workflow and the service.

use async_trait::async_trait;

use deckgen_core::record::PresentationRecord;
use deckgen_core::request::PresentationRequest;

use crate::api::{ApiError, PresentationApi};

/// The three calls a form workflow makes against the generation
/// service.
///
/// [`PresentationApi`] is the production implementation; tests
/// substitute recording fakes so flow behavior can be asserted without
/// a network.
#[async_trait]
pub trait PresentationService: Send + Sync {
    /// Load an existing presentation's stored configuration.
    async fn fetch(&self, id: &str) -> Result<PresentationRecord, ApiError>;

    /// Create a presentation from a validated request.
    async fn create(&self, request: &PresentationRequest) -> Result<PresentationRecord, ApiError>;

    /// Reconfigure an existing presentation, keeping its id.
    async fn update(
        &self,
        id: &str,
        request: &PresentationRequest,
    ) -> Result<PresentationRecord, ApiError>;
}

#[async_trait]
impl PresentationService for PresentationApi {
    async fn fetch(&self, id: &str) -> Result<PresentationRecord, ApiError> {
        PresentationApi::fetch(self, id).await
    }

    async fn create(&self, request: &PresentationRequest) -> Result<PresentationRecord, ApiError> {
        PresentationApi::create(self, request).await
    }

    async fn update(
        &self,
        id: &str,
        request: &PresentationRequest,
    ) -> Result<PresentationRecord, ApiError> {
        PresentationApi::update(self, id, request).await
    }
}
