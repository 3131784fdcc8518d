//! Configuration management for Hogo.
//!
//! # Overview
//!
//! Hogo uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HOGO_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Per-section validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hogo::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("hogo.toml")?;
//!
//! println!("Log level: {}", config.application.log_level);
//! println!("Keywords: {:?}", config.detection.custom_keywords);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`DetectionConfig`] - Detector selection and tuning
//! - [`RedactionOptions`] - Replacement and rendering options
//! - [`AssistConfig`] - External detection models and timeout
//! - [`AuditConfig`] - Audit trail
//! - [`LoggingConfig`] - Log files and rotation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [detection]
//! enable_names = true
//! custom_keywords = ["${HOGO_COMPANY_NAME}"]
//! recent_birth_year_window = 20
//!
//! [redaction]
//! keep_prefecture = true
//! name_initial = false
//! substitution = "global"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/hogo-audit.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::anonymization::config::{
    AssistConfig, AuditConfig, DetectionConfig, RedactionOptions, SubstitutionMode,
};
pub use loader::{default_config, load_config, load_config_from_str};
pub use schema::{ApplicationConfig, HogoConfig, LoggingConfig};
