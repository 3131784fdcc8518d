//! Main redaction engine
//!
//! This module provides the [`RedactionEngine`] that ties detection,
//! redaction and audit logging together for plain-text documents.
//!
//! # Architecture
//!
//! The engine coordinates three components:
//! - **Merger**: runs the pattern and name detectors plus custom keywords
//! - **Redactor**: writes replacements for enabled detections
//! - **Audit Logger**: records each processed document with hashed values
//!
//! # Examples
//!
//! ```
//! use hogo::anonymization::{EngineConfig, RedactionEngine};
//!
//! let engine = RedactionEngine::new(EngineConfig::default())?;
//! let outcome = engine.process_document("resume-1", "氏名：田中 太郎\n電話：090-1234-5678", None)?;
//!
//! assert!(outcome.redacted_text.contains("[電話番号]"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::anonymization::{
    anonymizer::Redactor,
    audit::AuditLogger,
    config::{AuditConfig, DetectionConfig, RedactionOptions},
    detector::{context::BirthdayPolicy, patterns::PatternRegistry, NameDetector, PatternDetector, PiiDetector},
    merger::{merge_detections, DetectionMerger},
    models::{Detection, RedactionOutcome},
    normalizer::normalize,
    report::DetectionReport,
    spans::Segmentation,
};
use crate::domain::HogoError;
use anyhow::{Context, Result};
use std::time::Instant;

/// Settings the engine is built from
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub detection: DetectionConfig,
    pub redaction: RedactionOptions,
    pub audit: AuditConfig,
}

/// Main redaction engine
///
/// Detection and redaction are synchronous and the engine holds no mutable
/// state, so one instance can be shared across threads behind an `Arc`.
pub struct RedactionEngine {
    config: EngineConfig,
    merger: DetectionMerger,
    audit_logger: AuditLogger,
}

impl RedactionEngine {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library file cannot be loaded
    /// - The audit log directory cannot be created
    pub fn new(config: EngineConfig) -> Result<Self> {
        config
            .detection
            .validate()
            .context("Invalid detection configuration")?;
        config.audit.validate().context("Invalid audit configuration")?;

        let registry = match config.detection.pattern_library {
            Some(ref path) => PatternRegistry::from_file(path),
            None => PatternRegistry::default_patterns(),
        }
        .map_err(|e| HogoError::PatternLibrary(format!("{e:#}")))?;

        let birthday_policy = match config.detection.reference_year {
            Some(reference_year) => BirthdayPolicy {
                reference_year,
                recent_year_window: config.detection.recent_birth_year_window,
            },
            None => BirthdayPolicy::current(config.detection.recent_birth_year_window),
        };

        let mut detectors: Vec<Box<dyn PiiDetector>> = vec![Box::new(
            PatternDetector::with_registry(registry).with_birthday_policy(birthday_policy),
        )];
        if config.detection.enable_names {
            detectors.push(Box::new(NameDetector::new()));
        }
        let merger = DetectionMerger::new(detectors);

        let audit_logger = AuditLogger::from_config(&config.audit)?;

        tracing::debug!(
            detectors = ?merger.detector_names(),
            audit = audit_logger.is_enabled(),
            "Redaction engine ready"
        );

        Ok(Self {
            config,
            merger,
            audit_logger,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Detect PII in `text` using the configured custom keywords plus `extra_keywords`
    ///
    /// Values refer to the normalized form of `text`.
    pub fn detect_all(&self, text: &str, extra_keywords: &[String]) -> Vec<Detection> {
        self.merger
            .detect_normalized(&normalize(text), &self.keywords(extra_keywords))
    }

    /// Append external detections not already present
    pub fn merge_external(&self, base: Vec<Detection>, external: Vec<Detection>) -> Vec<Detection> {
        merge_detections(base, external)
    }

    /// Redact `normalized` with the configured options
    pub fn redact(&self, normalized: &str, detections: &[Detection]) -> String {
        Redactor::for_text(normalized, &self.config.redaction).redact(normalized, detections)
    }

    /// Resolve `normalized` into segments for rendering
    pub fn segments(&self, normalized: &str, detections: &[Detection]) -> Segmentation {
        let redactor = Redactor::for_text(normalized, &self.config.redaction);
        Segmentation::resolve(normalized, detections, &redactor)
    }

    /// Detect, merge external suggestions and redact one document
    pub fn process_document(
        &self,
        document_id: &str,
        text: &str,
        external: Option<Vec<Detection>>,
    ) -> Result<RedactionOutcome> {
        let start = Instant::now();

        let normalized = normalize(text);
        let mut detections = self
            .merger
            .detect_normalized(&normalized, &self.config.detection.custom_keywords);
        if let Some(external) = external {
            detections = merge_detections(detections, external);
        }

        let redacted = self.redact(&normalized, &detections);
        let elapsed = start.elapsed();

        crate::log_detection_summary!(document_id, detections.len(), elapsed);

        let outcome = RedactionOutcome::new(
            document_id.to_string(),
            normalized,
            redacted,
            detections,
            elapsed.as_millis() as u64,
        );

        self.audit_logger
            .log_outcome(&outcome)
            .with_context(|| format!("Failed to audit document {document_id}"))?;

        Ok(outcome)
    }

    /// Process several documents and build a report
    ///
    /// A document that fails is skipped and recorded as a report warning.
    pub fn process_batch<I, S>(&self, documents: I) -> (Vec<RedactionOutcome>, DetectionReport)
    where
        I: IntoIterator<Item = (String, S)>,
        S: AsRef<str>,
    {
        let documents: Vec<(String, S)> = documents.into_iter().collect();
        let total = documents.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut report = DetectionReport::new();

        for (i, (document_id, text)) in documents.into_iter().enumerate() {
            crate::log_batch_processing!(i + 1, total);

            match self.process_document(&document_id, text.as_ref(), None) {
                Ok(outcome) => {
                    let redactor = Redactor::for_text(&outcome.normalized_text, &self.config.redaction);
                    report.add_outcome(&outcome, &redactor);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    tracing::error!(document_id = %document_id, error = ?e, "Failed to process document");
                    report.add_warning(format!("Failed to process {document_id}: {e}"));
                }
            }
        }

        (outcomes, report)
    }

    fn keywords(&self, extra: &[String]) -> Vec<String> {
        self.config
            .detection
            .custom_keywords
            .iter()
            .chain(extra)
            .cloned()
            .collect()
    }
}
