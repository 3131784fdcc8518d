//! Audit logging module
//!
//! Provides structured audit logging for redaction runs.

pub mod logger;

pub use logger::AuditLogger;
