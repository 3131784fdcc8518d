//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr, keeping stdout free for command output
//! - JSON-formatted file logs with daily or hourly rotation
//! - Configurable log levels
//!
//! Detected values never appear in log fields; only counts, rule ids and
//! detection types do.
//!
//! # Example
//!
//! ```no_run
//! use hogo::logging::init_logging;
//! use hogo::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the detection counts of a processed document
///
/// # Example
///
/// ```no_run
/// use hogo::log_detection_summary;
/// use std::time::Duration;
///
/// log_detection_summary!("resume.txt", 12, Duration::from_millis(8));
/// ```
#[macro_export]
macro_rules! log_detection_summary {
    ($document_id:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            document_id = %$document_id,
            detections = $count,
            duration_ms = $duration.as_millis() as u64,
            "Document processed"
        );
    };
}

/// Log a retry against the fallback model of an external detection source
///
/// # Example
///
/// ```no_run
/// use hogo::log_assist_retry;
///
/// log_assist_retry!("primary-model", "fallback-model", "no_json");
/// ```
#[macro_export]
macro_rules! log_assist_retry {
    ($primary:expr, $fallback:expr, $reason:expr) => {
        tracing::warn!(
            primary_model = %$primary,
            fallback_model = %$fallback,
            reason = %$reason,
            "External detection failed, retrying with fallback model"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use hogo::log_error_with_context;
/// use hogo::domain::HogoError;
///
/// let error = HogoError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log batch progress
#[macro_export]
macro_rules! log_batch_processing {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing batch"
        );
    };
}
