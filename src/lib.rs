// Hogo - PII detection and redaction for Japanese documents
// Copyright (c) 2025 Hogo Contributors
// Licensed under the MIT License

//! # Hogo - PII detection and redaction for Japanese documents
//!
//! Hogo finds personal information in free-form Japanese text such as
//! résumés and application forms, and produces a redacted rendering.
//!
//! ## Overview
//!
//! This library provides:
//! - **Detection** of e-mail addresses, URLs, phone numbers, postal codes,
//!   birthdays, street addresses, My Number identifiers, SNS handles and
//!   personal names
//! - **Merging** of detections from pattern rules, name dictionaries,
//!   custom keywords and external (AI-assisted) suggestions
//! - **Redaction** with per-type placeholders, prefecture-preserving
//!   addresses and name initials
//! - **Segmentation** of text into plain and flagged spans for viewers
//!
//! ## Architecture
//!
//! - [`anonymization`] - Detection, merging, redaction, audit and reporting
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use hogo::anonymization::{apply_redaction, detect_all, config::RedactionOptions};
//!
//! let text = "氏名：田中 太郎\n電話：090-1234-5678";
//! let detections = detect_all(text, &[]);
//!
//! let options = RedactionOptions::default();
//! let redacted = apply_redaction(text, &detections, &options);
//! assert!(redacted.contains("[電話番号]"));
//! ```
//!
//! ## Error Handling
//!
//! Detection and redaction never fail. Configuration, pattern libraries and
//! I/O report errors through [`domain::HogoError`].
//!
//! ## Logging
//!
//! Hogo uses structured logging with the `tracing` crate. Detected values
//! are never logged; counts, rule ids and detection types are.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
