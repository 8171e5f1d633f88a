//! JSON request/response shapes for the REST API.

use issue_classifier_core::{ClassificationInput, ClassificationResult, ClassificationRule};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Issue Classification Service";
pub const HEALTH_SERVICE_ID: &str = "issue-classifier";

/// POST /classify body: `{"title": str, "description"?: str}`.
pub type ClassifyRequest = ClassificationInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub tags: Vec<String>,
}

impl From<ClassificationResult> for ClassifyResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            tags: result.into_tags(),
        }
    }
}

/// One row of GET /rules. `order` is not part of the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleView {
    pub tag: String,
    pub keywords: Vec<String>,
}

impl From<&ClassificationRule> for RuleView {
    fn from(rule: &ClassificationRule) -> Self {
        Self {
            tag: rule.tag().to_string(),
            keywords: rule.keywords().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: Vec<RuleView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
