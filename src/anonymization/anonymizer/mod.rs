//! Replacement policies
//!
//! A replacement for a detection is chosen by the first policy in a chain
//! that has an opinion: name initials, prefecture-preserving address masking,
//! then the per-type placeholder table which always answers.

pub mod initials;
pub mod placeholder;
pub mod redaction;

use crate::anonymization::models::Detection;

pub use initials::InitialsPolicy;
pub use placeholder::{extract_prefecture, placeholder_for, PlaceholderPolicy, PrefecturePolicy};
pub use redaction::{apply_redaction, Redactor};

/// Trait for replacement policy implementations
pub trait ReplacementPolicy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Replacement text, or `None` to defer to the next policy
    fn replacement(&self, detection: &Detection) -> Option<String>;
}
