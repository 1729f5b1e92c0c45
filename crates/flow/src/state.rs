//! Flow state machine for one mounted form.

use deckgen_core::record::PresentationRecord;

/// Lifecycle of a single form instance.
///
/// Create flows start at `Idle`; modify flows start at `Hydrating`
/// and only become interactive once the fetch succeeds. Allowed
/// transitions:
///
/// ```text
/// Hydrating -> Idle | Failed{fatal}
/// Idle      -> Submitting
/// Submitting -> Success | Failed
/// Failed{!fatal} -> Submitting | Idle (dismiss)
/// Success   -> Submitting (resubmit)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Waiting for the initial fetch (modify flow only).
    Hydrating,
    /// Interactive, no result to show yet.
    Idle,
    /// One submission in flight; further submits are gated off.
    Submitting,
    /// The service accepted the last submission.
    Success(PresentationRecord),
    /// The last operation failed. `fatal` marks load failures the form
    /// cannot recover from in place; submit failures stay editable.
    Failed { message: String, fatal: bool },
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FlowState::Submitting)
    }

    /// Whether the form accepts a submit right now.
    pub fn accepts_submission(&self) -> bool {
        match self {
            FlowState::Idle | FlowState::Success(_) => true,
            FlowState::Failed { fatal, .. } => !fatal,
            FlowState::Hydrating | FlowState::Submitting => false,
        }
    }
}
