//! Configuration schema types
//!
//! This module defines the structure of `hogo.toml`. Every section is
//! optional; a missing section takes its defaults.

use crate::anonymization::config::{AssistConfig, AuditConfig, DetectionConfig, RedactionOptions};
use crate::anonymization::engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// Main Hogo configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HogoConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detector selection and tuning
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Replacement and rendering options
    #[serde(default)]
    pub redaction: RedactionOptions,

    /// External detection source
    #[serde(default)]
    pub assist: AssistConfig,

    /// Audit trail
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HogoConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.detection
            .validate()
            .map_err(|e| format!("detection: {e:#}"))?;
        self.assist.validate().map_err(|e| format!("assist: {e:#}"))?;
        self.audit.validate().map_err(|e| format!("audit: {e:#}"))?;
        self.logging.validate()?;
        Ok(())
    }

    /// Engine settings drawn from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            detection: self.detection.clone(),
            redaction: self.redaction,
            audit: self.audit.clone(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: HogoConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(config.detection.enable_names);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = HogoConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = HogoConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_assist_timeout_is_reported_by_section() {
        let mut config = HogoConfig::default();
        config.assist.timeout_seconds = 0;
        assert!(config.validate().unwrap_err().starts_with("assist:"));
    }

    #[test]
    fn test_engine_config_carries_sections() {
        let config: HogoConfig = toml::from_str(
            r#"
[detection]
custom_keywords = ["株式会社ホゴ"]

[redaction]
keep_prefecture = true
"#,
        )
        .unwrap();

        let engine = config.engine_config();
        assert_eq!(engine.detection.custom_keywords, vec!["株式会社ホゴ"]);
        assert!(engine.redaction.keep_prefecture);
    }
}
