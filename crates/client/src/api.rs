//! REST client for the presentation-generation service.
//!
//! Wraps the service's three endpoints (create, fetch, configure)
//! using [`reqwest`]. Every call is single-shot: no retries, no
//! polling; failures surface immediately to the caller.

use serde::Deserialize;

use deckgen_core::record::PresentationRecord;
use deckgen_core::request::PresentationRequest;

use crate::config::ServiceConfig;
use crate::records::{PresentationPayload, RecordDto};

/// Shown when the service fails without a usable `{error}` body.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while talking to the generation service.";

/// HTTP client for one presentation service.
pub struct PresentationApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the service adapter.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection refused, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service does not know the requested presentation.
    #[error("Presentation not found")]
    NotFound,

    /// The service rejected the request with a non-2xx status.
    #[error("Service error ({status}): {message}")]
    Service {
        status: u16,
        /// Message from the `{error}` body, empty when absent.
        message: String,
    },

    /// The service answered 2xx but the record failed conversion.
    #[error("Malformed record from service: {0}")]
    MalformedRecord(#[from] deckgen_core::error::CoreError),
}

impl ApiError {
    /// Message suitable for the form's global error slot.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Service { message, .. } if !message.is_empty() => message.clone(),
            ApiError::NotFound => "Presentation not found".to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Error body the service sends on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl PresentationApi {
    /// Create a client for the configured service.
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.api_base())
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across forms).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch an existing presentation's stored configuration.
    ///
    /// `GET /presentations/{id}`. Used by the modify flow on load.
    pub async fn fetch(&self, id: &str) -> Result<PresentationRecord, ApiError> {
        let response = self
            .client
            .get(format!("{}/presentations/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_record(response).await
    }

    /// Submit a new presentation for generation.
    ///
    /// `POST /presentations` with the validated request body.
    pub async fn create(&self, request: &PresentationRequest) -> Result<PresentationRecord, ApiError> {
        let payload = PresentationPayload::from(request);
        tracing::info!(
            topic = %payload.topic,
            num_slides = payload.num_slides,
            "Submitting presentation for generation"
        );

        let response = self
            .client
            .post(format!("{}/presentations", self.base_url))
            .json(&payload)
            .send()
            .await?;

        Self::parse_record(response).await
    }

    /// Reconfigure and regenerate an existing presentation in place.
    ///
    /// `POST /presentations/{id}/configure`; the id is preserved.
    pub async fn update(
        &self,
        id: &str,
        request: &PresentationRequest,
    ) -> Result<PresentationRecord, ApiError> {
        let payload = PresentationPayload::from(request);
        tracing::info!(
            id = %id,
            num_slides = payload.num_slides,
            "Submitting presentation reconfiguration"
        );

        let response = self
            .client
            .post(format!("{}/presentations/{}/configure", self.base_url, id))
            .json(&payload)
            .send()
            .await?;

        Self::parse_record(response).await
    }

    // ---- private helpers ----

    /// Map a non-2xx response to the error taxonomy: 404 becomes
    /// [`ApiError::NotFound`], anything else carries the `{error}`
    /// body message when one can be read.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_default();
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful response body into the domain record.
    async fn parse_record(response: reqwest::Response) -> Result<PresentationRecord, ApiError> {
        let response = Self::ensure_success(response).await?;
        let dto = response.json::<RecordDto>().await?;
        Ok(dto.into_record()?)
    }
}
