//! GET /rules: read-only rendering of the rule catalog.

use std::sync::Arc;

use axum::{Extension, Json};
use issue_classifier_core::Classifier;

use crate::proto::{RuleView, RulesResponse};

pub async fn list_rules(Extension(classifier): Extension<Arc<Classifier>>) -> Json<RulesResponse> {
    Json(RulesResponse {
        rules: classifier.all_rules().iter().map(RuleView::from).collect(),
    })
}
