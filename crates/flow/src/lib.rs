//! Per-form workflow: the flow state machine, submission gating, and
//! the result render model.
//!
//! Each mounted form owns one [`controller::FormFlow`] exclusively.
//! The flow validates locally before any network call, allows one
//! in-flight submission at a time, and discards the result of a call
//! that finishes after the form has been torn down.

pub mod controller;
pub mod presenter;
pub mod state;
