use thiserror::Error;

/// Rejections raised while building a [`RuleCatalog`](crate::RuleCatalog).
///
/// Classification itself never fails; these only surface at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one rule")]
    EmptyCatalog,

    #[error("rule #{order} has an empty tag")]
    EmptyTag { order: usize },

    #[error("tag '{0}' is reserved for unmatched input")]
    ReservedTag(String),

    #[error("duplicate tag: {0}")]
    DuplicateTag(String),

    #[error("rule '{0}' has no keywords")]
    NoKeywords(String),

    #[error("rule '{0}' contains an empty keyword")]
    EmptyKeyword(String),
}
