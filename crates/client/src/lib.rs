//! HTTP client for the presentation-generation service.
//!
//! The only crate that talks to the network. Provides the wire DTOs,
//! the reqwest-based [`api::PresentationApi`], the
//! [`service::PresentationService`] seam the flow layer calls through,
//! and the env-derived [`config::ServiceConfig`].

pub mod api;
pub mod config;
pub mod records;
pub mod service;
