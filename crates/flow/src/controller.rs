//! The workflow controller owning one form instance.

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use deckgen_client::service::PresentationService;
use deckgen_core::error::CoreError;
use deckgen_core::form::FormState;
use deckgen_core::layout::SlideLayout;
use deckgen_core::types::PresentationId;
use deckgen_core::validate::{message_for, validate, FieldViolation};

use crate::state::FlowState;

/// One mounted form: its state, its service handle, and its flow
/// position. Nothing here is shared between form instances.
pub struct FormFlow {
    form: FormState,
    service: Arc<dyn PresentationService>,
    state: FlowState,
    violations: Vec<FieldViolation>,
    /// Presentation being modified; `None` for the create flow.
    target: Option<PresentationId>,
    /// Set when `Success` newly appears; consumed by the presenter to
    /// scroll the download affordance into view.
    reveal_result: bool,
    /// Cancelled when the owning view unmounts.
    cancel: CancellationToken,
}

impl FormFlow {
    /// Create-flow form: interactive immediately.
    pub fn create(service: Arc<dyn PresentationService>) -> Self {
        Self {
            form: FormState::new(),
            service,
            state: FlowState::Idle,
            violations: Vec::new(),
            target: None,
            reveal_result: false,
            cancel: CancellationToken::new(),
        }
    }

    /// Modify-flow form: starts hydrating and gates submission until
    /// [`hydrate`](Self::hydrate) succeeds.
    pub fn modify(service: Arc<dyn PresentationService>, id: PresentationId) -> Self {
        Self {
            form: FormState::new(),
            service,
            state: FlowState::Hydrating,
            violations: Vec::new(),
            target: Some(id),
            reveal_result: false,
            cancel: CancellationToken::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Field violations from the last rejected submission attempt.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// First violation message for one field, for inline display.
    pub fn violation_for(&self, field: &str) -> Option<&str> {
        message_for(&self.violations, field)
    }

    /// Token handle the owning view cancels on unmount. An in-flight
    /// call's result is then discarded instead of applied.
    pub fn cancellation_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    // ---- field passthroughs ----

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.form.set_topic(topic);
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.form.set_theme(theme);
    }

    pub fn set_slide_count(&mut self, raw: &str) {
        self.form.set_slide_count(raw);
    }

    pub fn set_layout_at(&mut self, index: usize, layout: SlideLayout) -> Result<(), CoreError> {
        self.form.set_layout_at(index, layout)
    }

    // ---- flow transitions ----

    /// Run the initial fetch for a modify flow and hydrate the form.
    ///
    /// No-op for create flows and outside the `Hydrating` state. A
    /// failed fetch is fatal: the form never becomes interactive.
    pub async fn hydrate(&mut self) {
        if !matches!(self.state, FlowState::Hydrating) {
            return;
        }
        let Some(id) = self.target.clone() else {
            return;
        };

        let service = Arc::clone(&self.service);
        match cancellable(&self.cancel, async move { service.fetch(&id).await }).await {
            None => {}
            Some(Ok(record)) => {
                tracing::info!(id = %record.id, "Hydrated form from stored presentation");
                self.form.hydrate(&record);
                self.state = FlowState::Idle;
            }
            Some(Err(err)) => {
                tracing::error!(error = %err, "Failed to load presentation");
                self.state = FlowState::Failed {
                    message: err.user_message(),
                    fatal: true,
                };
            }
        }
    }

    /// Validate and, if clean, submit the current form.
    ///
    /// Gated while a submission is already in flight, while hydrating,
    /// and after a fatal load failure. Validation failures record
    /// field violations and make no network call. A submit failure
    /// leaves the form populated and editable for a retry.
    pub async fn submit(&mut self) {
        if !self.state.accepts_submission() {
            return;
        }

        self.violations.clear();
        let request = match validate(&self.form.snapshot()) {
            Ok(request) => request,
            Err(violations) => {
                self.violations = violations;
                return;
            }
        };

        self.state = FlowState::Submitting;
        let service = Arc::clone(&self.service);
        let target = self.target.clone();
        let call = async move {
            match target {
                Some(id) => service.update(&id, &request).await,
                None => service.create(&request).await,
            }
        };

        match cancellable(&self.cancel, call).await {
            // Torn down mid-flight: the result must not be applied.
            None => {}
            Some(Ok(record)) => {
                tracing::info!(id = %record.id, "Presentation submission accepted");
                self.reveal_result = true;
                self.state = FlowState::Success(record);
            }
            Some(Err(err)) => {
                tracing::error!(error = %err, "Presentation submission failed");
                self.state = FlowState::Failed {
                    message: err.user_message(),
                    fatal: false,
                };
            }
        }
    }

    /// Dismiss a recoverable error, returning the form to `Idle`.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, FlowState::Failed { fatal: false, .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// One-shot flag: true the first time it is read after a new
    /// `Success`, so the view scrolls the download affordance into
    /// view exactly once.
    pub fn take_reveal(&mut self) -> bool {
        std::mem::take(&mut self.reveal_result)
    }
}

impl Drop for FormFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Race a future against the teardown token. `None` means the form
/// was torn down first and the output must be discarded.
async fn cancellable<T>(cancel: &CancellationToken, fut: impl Future<Output = T>) -> Option<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        out = fut => Some(out),
    }
}
