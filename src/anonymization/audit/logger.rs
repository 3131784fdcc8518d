//! Audit logger for redaction runs

use crate::anonymization::config::AuditConfig;
use crate::anonymization::models::{Detection, RedactionOutcome};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document_id: String,
    detections_count: usize,
    enabled_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    id: String,
    #[serde(rename = "type")]
    detection_type: String,
    category: String,
    source: String,
    confidence: f32,
    enabled: bool,
    /// SHA-256 hash of the value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redaction runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Create an audit logger from its configuration section
    pub fn from_config(config: &AuditConfig) -> Result<Self> {
        Self::new(config.log_path.clone(), config.json_format, config.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one line for a processed document
    pub fn log_outcome(&self, outcome: &RedactionOutcome) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            document_id: outcome.document_id.clone(),
            detections_count: outcome.detections.len(),
            enabled_count: outcome.detections.iter().filter(|d| d.enabled).count(),
            processing_time_ms: outcome.processing_time_ms,
            detections: outcome
                .detections
                .iter()
                .map(|d| self.create_audit_detection(d))
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(&self, detection: &Detection) -> AuditDetection {
        AuditDetection {
            id: detection.id.clone(),
            detection_type: detection.detection_type.to_string(),
            category: detection.category.to_string(),
            source: format!("{:?}", detection.source).to_lowercase(),
            confidence: detection.confidence,
            enabled: detection.enabled,
            value_hash: hash_value(&detection.value),
        }
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Document: {} | Detections: {} ({} enabled) | Time: {}ms",
                entry.timestamp,
                entry.document_id,
                entry.detections_count,
                entry.enabled_count,
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// SHA-256 of a detected value, hex encoded
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
