//! Classification Engine: maps free text to catalog-ordered tags.

use crate::catalog::RuleCatalog;
use crate::types::{ClassificationInput, ClassificationResult, ClassificationRule};

/// Stateless keyword classifier over an immutable [`RuleCatalog`].
///
/// Construct once at startup and share it (`Arc<Classifier>`) across
/// request handlers; it is `Send + Sync` and never mutates.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    catalog: RuleCatalog,
}

impl Classifier {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Read-only view of every rule, in evaluation order.
    pub fn all_rules(&self) -> &[ClassificationRule] {
        self.catalog.all_rules()
    }

    /// Classify `title` and `description`.
    ///
    /// The two are joined with a single space and lowercased once. Every
    /// rule is evaluated; a rule contributes its tag on its first keyword
    /// hit. Tags come back in catalog order, or `["general"]` when
    /// nothing matched. Total over all inputs.
    pub fn classify(&self, title: &str, description: &str) -> ClassificationResult {
        let text = format!("{title} {description}").to_lowercase();

        let mut tags: Vec<String> = Vec::new();
        for rule in self.catalog.all_rules() {
            if rule.matches(&text).is_some() && !tags.iter().any(|t| t == rule.tag()) {
                tags.push(rule.tag().to_string());
            }
        }

        ClassificationResult::from_tags(tags)
    }

    pub fn classify_input(&self, input: &ClassificationInput) -> ClassificationResult {
        self.classify(&input.title, &input.description)
    }
}
