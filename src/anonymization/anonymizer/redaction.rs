//! Redaction of detections into the text

use super::placeholder::GENERIC_PLACEHOLDER;
use super::{InitialsPolicy, PlaceholderPolicy, PrefecturePolicy, ReplacementPolicy};
use crate::anonymization::config::{RedactionOptions, SubstitutionMode};
use crate::anonymization::models::Detection;
use crate::anonymization::spans::Segmentation;

/// Applies a policy chain to enabled detections
pub struct Redactor {
    policies: Vec<Box<dyn ReplacementPolicy>>,
    substitution: SubstitutionMode,
}

impl Redactor {
    /// Create a redactor from an explicit policy chain
    pub fn new(policies: Vec<Box<dyn ReplacementPolicy>>, substitution: SubstitutionMode) -> Self {
        Self {
            policies,
            substitution,
        }
    }

    /// Policy chain for `options`; readings for initials come from `text`
    pub fn for_text(text: &str, options: &RedactionOptions) -> Self {
        let mut policies: Vec<Box<dyn ReplacementPolicy>> = Vec::new();
        if options.name_initial {
            policies.push(Box::new(InitialsPolicy::for_text(text)));
        }
        if options.keep_prefecture {
            policies.push(Box::new(PrefecturePolicy));
        }
        policies.push(Box::new(PlaceholderPolicy));
        Self::new(policies, options.substitution)
    }

    /// Replacement text for a single detection
    pub fn replacement(&self, detection: &Detection) -> String {
        self.policies
            .iter()
            .find_map(|p| p.replacement(detection))
            .unwrap_or_else(|| GENERIC_PLACEHOLDER.to_string())
    }

    /// Substitute every enabled detection in `text`
    ///
    /// `text` must be the normalized text the detections were computed from.
    pub fn redact(&self, text: &str, detections: &[Detection]) -> String {
        let enabled: Vec<Detection> = detections.iter().filter(|d| d.enabled).cloned().collect();

        let redacted = match self.substitution {
            SubstitutionMode::Global => self.redact_global(text, enabled),
            SubstitutionMode::Positional => Segmentation::resolve(text, &enabled, self).render(true),
        };

        tracing::debug!(
            detections = detections.len(),
            mode = ?self.substitution,
            "Redaction applied"
        );
        redacted
    }

    fn redact_global(&self, text: &str, mut enabled: Vec<Detection>) -> String {
        enabled.sort_by(|a, b| b.char_len().cmp(&a.char_len()));

        let mut out = text.to_string();
        for detection in enabled.iter().filter(|d| d.char_len() >= 2) {
            let replacement = self.replacement(detection);
            out = out.replace(&detection.value, &replacement);
        }
        out
    }
}

/// Redact `text` with the policy chain described by `options`
pub fn apply_redaction(text: &str, detections: &[Detection], options: &RedactionOptions) -> String {
    Redactor::for_text(text, options).redact(text, detections)
}
