//! Router construction for the issue classifier server.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use issue_classifier_core::Classifier;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the full axum router. The classifier is shared by every handler.
pub fn build_router(classifier: Arc<Classifier>) -> Router {
    Router::new()
        .route("/", get(handlers::health::service_info))
        .route("/health", get(handlers::health::health))
        .route("/classify", post(handlers::classify::classify))
        .route("/rules", get(handlers::rules::list_rules))
        .layer(Extension(classifier))
        .layer(TraceLayer::new_for_http())
}
