//! Regex-based PII detector

use super::{
    context::{self, BirthdayPolicy},
    patterns::{CompiledRule, ContextFilter, PatternRegistry},
    PiiDetector,
};
use crate::anonymization::models::{Detection, Source};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Regex-based PII detector
pub struct PatternDetector {
    pattern_registry: Arc<PatternRegistry>,
    birthday_policy: BirthdayPolicy,
}

impl PatternDetector {
    /// Create a new pattern detector with the built-in library
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self::with_registry(registry))
    }

    /// Create a new pattern detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            pattern_registry: Arc::new(registry),
            birthday_policy: BirthdayPolicy::default(),
        }
    }

    /// Set the policy used to suppress recent unlabeled dates
    pub fn with_birthday_policy(mut self, policy: BirthdayPolicy) -> Self {
        self.birthday_policy = policy;
        self
    }

    /// Registry backing this detector
    pub fn registry(&self) -> &PatternRegistry {
        &self.pattern_registry
    }

    fn scan_rule(&self, rule: &CompiledRule, text: &str, out: &mut Vec<Detection>) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut emitted = 0usize;

        for captures in rule.regex.captures_iter(text) {
            let captures = match captures {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(rule = %rule.id, error = %e, "Pattern scan aborted");
                    break;
                }
            };
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let raw = match rule.group {
                Some(group) => match captures.get(group) {
                    Some(m) => m.as_str(),
                    None => continue,
                },
                None => whole.as_str(),
            };

            let value = raw.trim();
            if value.chars().count() < 2 {
                continue;
            }
            if self.rejected(rule.filter, text, whole.start(), whole.end(), value) {
                continue;
            }
            if !seen.insert(format!("{}:{}", rule.id, value)) {
                continue;
            }

            let id = format!("{}_{}", rule.detection_type, out.len());
            out.push(
                Detection::new(id, rule.detection_type, rule.category, value, Source::Regex)
                    .with_confidence(rule.confidence),
            );
            emitted += 1;
        }

        if emitted > 0 {
            tracing::trace!(rule = %rule.id, count = emitted, "Rule matched");
        }
    }

    fn rejected(&self, filter: ContextFilter, text: &str, start: usize, end: usize, value: &str) -> bool {
        match filter {
            ContextFilter::None => false,
            ContextFilter::Phone => context::rejects_phone(text, start, end),
            ContextFilter::Postal => context::rejects_postal(text, start, end),
            ContextFilter::MyNumber => context::rejects_numeric(text, start, end),
            ContextFilter::Birthday => self.birthday_policy.rejects(text, start, value),
            ContextFilter::Sns => context::rejects_sns(text, start, end),
        }
    }
}

impl PiiDetector for PatternDetector {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn detect(&self, text: &str) -> Vec<Detection> {
        let mut detections = Vec::new();
        for rule in self.pattern_registry.all_rules() {
            self.scan_rule(rule, text, &mut detections);
        }
        detections
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new().expect("Failed to create default PatternDetector")
    }
}
