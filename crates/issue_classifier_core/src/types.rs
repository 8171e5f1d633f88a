//! Domain values: rules, classification input and result.

use serde::{Deserialize, Serialize};

/// Tag emitted when no rule matches.
pub const FALLBACK_TAG: &str = "general";

/// A (tag, keywords) pair with its fixed position in the catalog.
///
/// Keywords are matched as lowercase substrings, not whole words, so
/// `backend` matches inside `backends`. `order` is 1-based and only
/// records declaration position; it never suppresses other matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    tag: String,
    keywords: Vec<String>,
    order: usize,
}

impl ClassificationRule {
    /// Build an unplaced rule. The catalog assigns `order` on insertion.
    pub fn new<T, I, K>(tag: T, keywords: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            tag: tag.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            order: 0,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// First keyword contained in `normalized_text`, if any.
    ///
    /// `normalized_text` must already be lowercased.
    pub fn matches(&self, normalized_text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| normalized_text.contains(*kw))
    }

    pub(crate) fn placed(mut self, order: usize) -> Self {
        self.order = order;
        self.keywords = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }
}

/// Free text to classify. `description` defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ClassificationInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered, duplicate-free tags. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    tags: Vec<String>,
}

impl ClassificationResult {
    pub(crate) fn from_tags(tags: Vec<String>) -> Self {
        if tags.is_empty() {
            Self::fallback()
        } else {
            Self { tags }
        }
    }

    fn fallback() -> Self {
        Self {
            tags: vec![FALLBACK_TAG.to_string()],
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }

    /// True when no rule matched and the result is `["general"]`.
    pub fn is_fallback(&self) -> bool {
        self.tags.len() == 1 && self.tags[0] == FALLBACK_TAG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_matches_returns_first_hit() {
        let rule = ClassificationRule::new("bug", ["bug", "error"]).placed(1);
        assert_eq!(rule.matches("an error and a bug"), Some("bug"));
        assert_eq!(rule.matches("nothing here"), None);
    }

    #[test]
    fn placed_lowercases_keywords_and_sets_order() {
        let rule = ClassificationRule::new("deployment", ["CI/CD", "Deploy"]).placed(9);
        assert_eq!(rule.order(), 9);
        assert_eq!(rule.keywords(), ["ci/cd", "deploy"]);
    }

    #[test]
    fn empty_tags_become_fallback() {
        let result = ClassificationResult::from_tags(vec![]);
        assert_eq!(result.tags(), [FALLBACK_TAG]);
        assert!(result.is_fallback());
    }

    #[test]
    fn matched_tags_are_not_fallback() {
        let result = ClassificationResult::from_tags(vec!["bug".into()]);
        assert!(!result.is_fallback());
        assert_eq!(result.into_tags(), vec!["bug".to_string()]);
    }

    #[test]
    fn input_description_defaults_to_empty() {
        let input: ClassificationInput =
            serde_json::from_str(r#"{"title": "Fix login"}"#).unwrap();
        assert_eq!(input, ClassificationInput::new("Fix login", ""));
    }

    #[test]
    fn input_requires_title() {
        let err = serde_json::from_str::<ClassificationInput>(r#"{"description": "x"}"#);
        assert!(err.is_err());
    }
}
