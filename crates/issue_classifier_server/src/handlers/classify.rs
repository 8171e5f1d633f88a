//! POST /classify: tag an issue from its title and description.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};
use issue_classifier_core::Classifier;

use crate::error::AppError;
use crate::proto::{ClassifyRequest, ClassifyResponse};

pub async fn classify(
    Extension(classifier): Extension<Arc<Classifier>>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(req) = payload?;
    let result = classifier.classify_input(&req);
    tracing::debug!(
        title_len = req.title.len(),
        description_len = req.description.len(),
        tags = ?result.tags(),
        "classified issue"
    );
    Ok(Json(result.into()))
}
