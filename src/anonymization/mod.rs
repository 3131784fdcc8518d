//! PII detection and redaction for Japanese documents
//!
//! This module finds personal information in free-form Japanese text
//! (résumés, application forms, letters) and replaces it with readable
//! placeholders or initials.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Normalization**: fullwidth folding and whitespace cleanup
//! - **Detection**: pattern rules, name dictionaries and custom keywords
//! - **Merging**: deduplication with externally suggested detections
//! - **Redaction**: policy-driven replacement, globally or per span
//! - **Audit**: structured logging with hashed values
//!
//! # Usage
//!
//! ```
//! use hogo::anonymization::{apply_redaction, detect_all, config::RedactionOptions};
//!
//! let text = "メール：tanaka@example.com";
//! let detections = detect_all(text, &[]);
//! let redacted = apply_redaction(text, &detections, &RedactionOptions::default());
//! assert_eq!(redacted, "メール：[メールアドレス]");
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod external;
pub mod merger;
pub mod models;
pub mod normalizer;
pub mod reading;
pub mod report;
pub mod spans;

// Re-export main types
pub use anonymizer::{apply_redaction, Redactor};
pub use engine::{EngineConfig, RedactionEngine};
pub use external::{parse_external_payload, validate_external, ParseFailure};
pub use merger::{detect_all, merge_detections};
pub use models::{Category, Detection, DetectionType, RedactionOutcome, Source};
pub use normalizer::normalize;
pub use reading::{name_to_initial, ReadingMap};
pub use report::DetectionReport;
pub use spans::{resolve_segments, Segment, Segmentation};
