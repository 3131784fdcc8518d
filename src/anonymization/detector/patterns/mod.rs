//! Pattern library for PII detection

use crate::anonymization::models::{Category, DetectionType};
use anyhow::{Context, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Default confidence for pattern matches
pub const DEFAULT_RULE_CONFIDENCE: f32 = 0.95;

/// Context filter applied to a rule's raw matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextFilter {
    /// Keep every match
    None,
    /// Year-range, year-line and 年/月 suffix checks
    Phone,
    /// Year-range, year-line and digit-prefix checks
    Postal,
    /// Year-range and year-line checks
    MyNumber,
    /// Document-date labels and recent-year suppression
    Birthday,
    /// E-mail fragment and URL ownership checks
    Sns,
}

/// Rule definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule id
    pub id: String,
    /// Detection type label
    #[serde(rename = "type")]
    pub detection_type: String,
    /// Category label
    pub category: String,
    /// Regex source
    pub pattern: String,
    /// Capture group providing the value
    #[serde(default)]
    pub group: Option<usize>,
    /// Context filter
    #[serde(default = "default_filter")]
    pub filter: ContextFilter,
    /// Confidence score (0.0 - 1.0)
    #[serde(default)]
    pub confidence: Option<f32>,
}

fn default_filter() -> ContextFilter {
    ContextFilter::None
}

/// Compiled rule with metadata
///
/// The compiled regex holds no match state; every scan creates its own
/// iterator.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: String,
    pub regex: Regex,
    pub detection_type: DetectionType,
    pub category: Category,
    pub group: Option<usize>,
    pub filter: ContextFilter,
    pub confidence: f32,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    rules: Vec<RuleDefinition>,
}

/// Ordered registry of compiled rules
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<CompiledRule>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut rules = Vec::with_capacity(library.rules.len());
        for def in library.rules {
            if rules.iter().any(|r: &CompiledRule| r.id == def.id) {
                anyhow::bail!("Duplicate rule id in pattern library: {}", def.id);
            }

            let detection_type = DetectionType::parse(&def.detection_type).with_context(|| {
                format!("Invalid type in rule '{}': {}", def.id, def.detection_type)
            })?;
            let category = Category::parse(&def.category).with_context(|| {
                format!("Invalid category in rule '{}': {}", def.id, def.category)
            })?;
            let regex = Regex::new(&def.pattern)
                .with_context(|| format!("Invalid regex in rule '{}': {}", def.id, def.pattern))?;

            rules.push(CompiledRule {
                id: def.id,
                regex,
                detection_type,
                category,
                group: def.group,
                filter: def.filter,
                confidence: def.confidence.unwrap_or(DEFAULT_RULE_CONFIDENCE).clamp(0.01, 1.0),
            });
        }

        tracing::debug!(rules = rules.len(), "Pattern library compiled");
        Ok(Self { rules })
    }

    /// Create a default pattern registry with built-in rules
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../../patterns/ja_pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all rules in evaluation order
    pub fn all_rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Get the rule with the given id
    pub fn rule(&self, id: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_match(registry: &PatternRegistry, id: &str, text: &str) -> bool {
        registry.rule(id).unwrap().regex.is_match(text).unwrap()
    }

    #[test]
    fn test_load_default_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(registry.all_rules().len() >= 14);
        assert_eq!(registry.all_rules()[0].id, "email");
    }

    #[test]
    fn test_email_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(is_match(&registry, "email", "tanaka@example.com"));
        assert!(!is_match(&registry, "email", "not-an-email"));
    }

    #[test]
    fn test_phone_pattern_rejects_digit_adjacency() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(is_match(&registry, "phone", "電話：090-1234-5678"));
        assert!(is_match(&registry, "phone", "03-1234-5678"));
        assert!(!is_match(&registry, "phone", "1090-1234-56789"));
    }

    #[test]
    fn test_address_requires_block_number() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(is_match(&registry, "address", "東京都渋谷区神宮前3-14-5"));
        assert!(is_match(&registry, "address", "大阪府大阪市北区梅田1丁目2番3号"));
        assert!(!is_match(&registry, "address", "東京都港区六本木"));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let toml = r#"
[[rules]]
id = "bad"
type = "passport"
category = "personal"
pattern = "X"
"#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Invalid type"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let toml = r#"
[[rules]]
id = "a"
type = "email"
category = "contact"
pattern = "x@y"

[[rules]]
id = "a"
type = "email"
category = "contact"
pattern = "y@z"
"#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }

    #[test]
    fn test_rejects_invalid_regex() {
        let toml = r#"
[[rules]]
id = "broken"
type = "email"
category = "contact"
pattern = "(unclosed"
"#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Invalid regex"));
    }
}
