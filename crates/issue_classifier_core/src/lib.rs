//! Issue classifier core: keyword rules in, tags out.
//!
//! ```text
//! title + " " + description
//!       │  lowercase once
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  RuleCatalog (fixed, declaration order) │
//! │  security → bug → … → urgent            │
//! └─────────────────────────────────────────┘
//!       │  every rule evaluated, first keyword hit records the tag
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  ClassificationResult                   │
//! │  tags in catalog order, or ["general"]  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate performs I/O or holds mutable state. A
//! [`Classifier`] is built once and shared by reference.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod types;

pub use catalog::RuleCatalog;
pub use engine::Classifier;
pub use error::CatalogError;
pub use types::{ClassificationInput, ClassificationResult, ClassificationRule, FALLBACK_TAG};
