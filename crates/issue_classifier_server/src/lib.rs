//! issue_classifier_server: axum REST layer over the keyword classifier.
//!
//! The engine is pure and infallible; this crate only owns routing,
//! request-body validation, JSON shaping and startup config.

pub mod config;
pub mod error;
pub mod handlers;
pub mod proto;
pub mod router;
