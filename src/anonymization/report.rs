//! Detection reporting
//!
//! Aggregates what a run found across documents: counts by category and
//! source, a handful of masked samples, and warnings about detections that
//! deserve a human look.

use crate::anonymization::anonymizer::Redactor;
use crate::anonymization::models::{Category, Detection, RedactionOutcome, Source};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_SAMPLES: usize = 20;
const SAMPLES_PER_DOCUMENT: usize = 3;

/// Detection report with per-run statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Total documents processed
    pub total_documents: usize,

    /// Total detections
    pub total_detections: usize,

    /// Detections by category
    pub detections_by_category: BTreeMap<Category, usize>,

    /// Detections by provenance
    pub detections_by_source: BTreeMap<String, usize>,

    /// Sample replacements with masked originals
    pub samples: Vec<DetectionSample>,

    /// Warnings about likely false positives
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Sample replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSample {
    /// Document the sample comes from
    pub document_id: String,

    /// Original value, masked after the first character
    pub original: String,

    /// Replacement written into the text
    pub replacement: String,

    /// Detection type label
    #[serde(rename = "type")]
    pub detection_type: String,

    /// Category
    pub category: Category,

    /// Confidence score (0.0-1.0)
    pub confidence: f32,
}

/// Processing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per document (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Documents with at least one detection
    pub documents_with_pii: usize,

    /// Documents without detections
    pub documents_without_pii: usize,
}

impl DetectionReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            total_detections: 0,
            detections_by_category: BTreeMap::new(),
            detections_by_source: BTreeMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Add the results of one document
    pub fn add_outcome(&mut self, outcome: &RedactionOutcome, redactor: &Redactor) {
        self.total_documents += 1;
        self.stats.total_processing_time_ms += outcome.processing_time_ms;

        if outcome.detections.is_empty() {
            self.stats.documents_without_pii += 1;
        } else {
            self.stats.documents_with_pii += 1;
            self.total_detections += outcome.detections.len();

            for detection in &outcome.detections {
                *self.detections_by_category.entry(detection.category).or_insert(0) += 1;
                *self
                    .detections_by_source
                    .entry(source_label(detection.source).to_string())
                    .or_insert(0) += 1;
            }

            for detection in outcome.detections.iter().take(SAMPLES_PER_DOCUMENT) {
                self.add_sample(&outcome.document_id, detection, redactor.replacement(detection));
            }

            let heuristic = outcome
                .detections
                .iter()
                .filter(|d| d.source == Source::Heuristic)
                .count();
            if heuristic > 0 {
                self.add_warning(format!(
                    "{}: {} heuristic name detection(s); review for false positives",
                    outcome.document_id, heuristic
                ));
            }
        }

        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_documents as u64;
    }

    fn add_sample(&mut self, document_id: &str, detection: &Detection, replacement: String) {
        if self.samples.len() >= MAX_SAMPLES {
            return;
        }

        self.samples.push(DetectionSample {
            document_id: document_id.to_string(),
            original: mask_value(&detection.value),
            replacement,
            detection_type: detection.detection_type.to_string(),
            category: detection.category,
            confidence: detection.confidence,
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                     PII DETECTION REPORT                      \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Documents Processed:     {}\n", self.total_documents));
        output.push_str(&format!(
            "  Documents with PII:      {}\n",
            self.stats.documents_with_pii
        ));
        output.push_str(&format!(
            "  Documents without PII:   {}\n",
            self.stats.documents_without_pii
        ));
        output.push_str(&format!("  Total Detections:        {}\n", self.total_detections));
        output.push_str(&format!(
            "  Avg Processing Time:     {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push('\n');

        if !self.detections_by_category.is_empty() {
            output.push_str("🔍 DETECTIONS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.as_str(), count));
            }
            output.push('\n');

            output.push_str("🧭 DETECTIONS BY SOURCE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (source, count) in &self.detections_by_source {
                output.push_str(&format!("  {:30} {:>5}\n", source, count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE REPLACEMENTS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Document:    {}\n", sample.document_id));
                output.push_str(&format!("    Type:        {}\n", sample.detection_type));
                output.push_str(&format!(
                    "    Confidence:  {:.2}%\n",
                    sample.confidence * 100.0
                ));
                output.push_str(&format!("    Original:    \"{}\"\n", sample.original));
                output.push_str(&format!("    Replacement: \"{}\"\n", sample.replacement));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for DetectionReport {
    fn default() -> Self {
        Self::new()
    }
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Regex => "regex",
        Source::Dict => "dict",
        Source::Heuristic => "heuristic",
        Source::Ai => "ai",
    }
}

/// Keep the first character and mask the rest
pub fn mask_value(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.count().min(9);
            format!("{first}{}", "*".repeat(rest))
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::config::RedactionOptions;
    use crate::anonymization::models::DetectionType;

    fn redactor() -> Redactor {
        Redactor::for_text("", &RedactionOptions::default())
    }

    #[test]
    fn test_report_creation() {
        let report = DetectionReport::new();
        assert_eq!(report.total_documents, 0);
        assert_eq!(report.total_detections, 0);
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_add_outcome_without_pii() {
        let mut report = DetectionReport::new();
        let outcome = RedactionOutcome::new("doc".into(), "本文".into(), "本文".into(), vec![], 10);

        report.add_outcome(&outcome, &redactor());

        assert_eq!(report.total_documents, 1);
        assert_eq!(report.stats.documents_without_pii, 1);
        assert_eq!(report.stats.avg_processing_time_ms, 10);
    }

    #[test]
    fn test_add_outcome_with_pii() {
        let mut report = DetectionReport::new();
        let detections = vec![
            Detection::new("email_0", DetectionType::Email, Category::Contact, "tanaka@example.com", Source::Regex),
            Detection::new("name_context_0", DetectionType::NameContext, Category::Name, "鬼塚 虎之助", Source::Heuristic)
                .with_confidence(0.75),
        ];
        let outcome = RedactionOutcome::new("doc-1".into(), String::new(), String::new(), detections, 15);

        report.add_outcome(&outcome, &redactor());

        assert_eq!(report.total_detections, 2);
        assert_eq!(report.detections_by_category.get(&Category::Contact), Some(&1));
        assert_eq!(report.detections_by_source.get("heuristic"), Some(&1));
        assert_eq!(report.samples[0].original, "t*********");
        assert_eq!(report.samples[0].replacement, "[メールアドレス]");
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_format_console() {
        let mut report = DetectionReport::new();
        report.total_documents = 4;
        report.total_detections = 9;
        let output = report.format_console();
        assert!(output.contains("PII DETECTION REPORT"));
        assert!(output.contains("Documents Processed:     4"));
        assert!(output.contains("Total Detections:        9"));
    }

    #[test]
    fn test_mask_value() {
        assert_eq!(mask_value("田中 太郎"), "田****");
        assert_eq!(mask_value(""), "");
    }
}
