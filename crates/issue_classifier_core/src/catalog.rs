//! Rule Catalog: the fixed, ordered list of keyword rules.
//!
//! Rules are data, not branches: the catalog is served as-is by the
//! `/rules` endpoint and a new topic is added by appending a row to
//! [`DEFAULT_RULES`]. Declaration order is the evaluation order and the
//! order tags appear in results.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::{ClassificationRule, FALLBACK_TAG};

/// Default catalog, in evaluation order.
pub const DEFAULT_RULES: &[(&str, &[&str])] = &[
    (
        "security",
        &["auth", "login", "token", "password", "credential", "session"],
    ),
    ("bug", &["bug", "error", "crash", "exception", "fail", "broken"]),
    ("enhancement", &["feature", "enhancement", "improve", "add", "new"]),
    ("ui", &["ui", "interface", "design", "frontend", "css", "responsive"]),
    ("backend", &["api", "backend", "server", "database", "endpoint"]),
    ("performance", &["performance", "slow", "optimize", "speed", "latency"]),
    ("testing", &["test", "testing", "unit", "integration", "coverage"]),
    ("documentation", &["documentation", "docs", "readme", "guide", "manual"]),
    ("deployment", &["deployment", "deploy", "production", "staging", "ci/cd"]),
    ("urgent", &["urgent", "critical", "blocker", "hotfix"]),
];

/// Immutable, ordered set of [`ClassificationRule`]s.
///
/// Built once at startup; there are no insert or remove operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: Vec<ClassificationRule>,
}

impl RuleCatalog {
    /// Validate and place caller-supplied rules.
    ///
    /// Tags must be non-blank, unique and not the fallback tag; keyword
    /// sets non-empty, and no keyword empty. Keywords are folded to lowercase and `order` is
    /// assigned 1-based from position.
    pub fn new(rules: impl IntoIterator<Item = ClassificationRule>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut placed = Vec::new();

        for (idx, rule) in rules.into_iter().enumerate() {
            let order = idx + 1;
            if rule.tag().trim().is_empty() {
                return Err(CatalogError::EmptyTag { order });
            }
            if rule.tag() == FALLBACK_TAG {
                return Err(CatalogError::ReservedTag(rule.tag().to_string()));
            }
            if !seen.insert(rule.tag().to_string()) {
                return Err(CatalogError::DuplicateTag(rule.tag().to_string()));
            }
            if rule.keywords().is_empty() {
                return Err(CatalogError::NoKeywords(rule.tag().to_string()));
            }
            if rule.keywords().iter().any(|k| k.is_empty()) {
                return Err(CatalogError::EmptyKeyword(rule.tag().to_string()));
            }
            placed.push(rule.placed(order));
        }

        if placed.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self { rules: placed })
    }

    /// The compiled-in catalog from [`DEFAULT_RULES`].
    pub fn builtin() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .enumerate()
            .map(|(idx, (tag, keywords))| {
                ClassificationRule::new(*tag, keywords.iter().copied()).placed(idx + 1)
            })
            .collect();
        Self { rules }
    }

    /// Full catalog in declaration order.
    pub fn all_rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn get(&self, tag: &str) -> Option<&ClassificationRule> {
        self.rules.iter().find(|r| r.tag() == tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(ClassificationRule::tag)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
