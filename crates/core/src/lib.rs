//! Domain types and form-state logic for the deckgen client workflow.
//!
//! Everything here is pure and I/O-free: the form state manager, the
//! slide-count/layout-list synchronizer, and submission validation.
//! Talking to the generation service lives in `deckgen-client`; the
//! per-form state machine lives in `deckgen-flow`.

pub mod error;
pub mod form;
pub mod layout;
pub mod record;
pub mod request;
pub mod sync;
pub mod types;
pub mod validate;
