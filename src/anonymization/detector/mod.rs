//! PII detection module
//!
//! Provides the trait-based detection interface and the pattern, name and
//! keyword detectors that run over normalized text.

pub mod context;
pub mod custom;
pub mod names;
pub mod patterns;
pub mod regex;

use crate::anonymization::models::Detection;

pub use custom::KeywordDetector;
pub use names::NameDetector;
pub use regex::PatternDetector;

/// Trait for PII detection implementations
///
/// Detectors receive text that has already been normalized and must only
/// emit values that occur verbatim in it.
pub trait PiiDetector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Detect PII in normalized text
    fn detect(&self, text: &str) -> Vec<Detection>;
}
