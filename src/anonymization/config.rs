//! Engine configuration sections

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How replacements are written into the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Replace every literal occurrence of each value
    #[default]
    Global,
    /// Replace only the resolved, non-overlapping spans
    Positional,
}

impl SubstitutionMode {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "global" => Some(Self::Global),
            "positional" => Some(Self::Positional),
            _ => None,
        }
    }
}

/// Detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Run the dictionary/label name detector
    #[serde(default = "default_true")]
    pub enable_names: bool,

    /// Literal keywords always flagged (company names, project codes)
    #[serde(default)]
    pub custom_keywords: Vec<String>,

    /// Unlabeled dates at most this many years old are not birthdays
    #[serde(default = "default_birth_year_window")]
    pub recent_birth_year_window: u32,

    /// Fixed reference year for the window; the current year when unset
    #[serde(default)]
    pub reference_year: Option<i32>,

    /// Path to a pattern library TOML file replacing the built-in one
    pub pattern_library: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_birth_year_window() -> u32 {
    20
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enable_names: true,
            custom_keywords: Vec::new(),
            recent_birth_year_window: default_birth_year_window(),
            reference_year: None,
            pattern_library: None,
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                anyhow::bail!("Pattern library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Pattern library must be a TOML file: {}", path.display());
            }
        }

        if self.recent_birth_year_window > 120 {
            anyhow::bail!(
                "recent_birth_year_window must be at most 120, got {}",
                self.recent_birth_year_window
            );
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOGO_DETECTION_ENABLE_NAMES") {
            self.enable_names = val
                .parse()
                .context("Invalid HOGO_DETECTION_ENABLE_NAMES value")?;
        }

        if let Ok(val) = std::env::var("HOGO_DETECTION_CUSTOM_KEYWORDS") {
            self.custom_keywords = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("HOGO_DETECTION_RECENT_BIRTH_YEAR_WINDOW") {
            self.recent_birth_year_window = val
                .parse()
                .context("Invalid HOGO_DETECTION_RECENT_BIRTH_YEAR_WINDOW value")?;
        }

        if let Ok(val) = std::env::var("HOGO_DETECTION_REFERENCE_YEAR") {
            self.reference_year = Some(
                val.parse()
                    .context("Invalid HOGO_DETECTION_REFERENCE_YEAR value")?,
            );
        }

        if let Ok(val) = std::env::var("HOGO_DETECTION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

/// Rendering options for redaction and segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionOptions {
    /// Keep the prefecture of an address and mask the rest
    #[serde(default)]
    pub keep_prefecture: bool,

    /// Replace names with initials instead of a placeholder
    #[serde(default)]
    pub name_initial: bool,

    /// Segments display the replacement rather than the original
    #[serde(default = "default_true")]
    pub show_redacted: bool,

    /// Substitution strategy
    #[serde(default)]
    pub substitution: SubstitutionMode,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            keep_prefecture: false,
            name_initial: false,
            show_redacted: true,
            substitution: SubstitutionMode::Global,
        }
    }
}

impl RedactionOptions {
    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOGO_REDACTION_KEEP_PREFECTURE") {
            self.keep_prefecture = val
                .parse()
                .context("Invalid HOGO_REDACTION_KEEP_PREFECTURE value")?;
        }

        if let Ok(val) = std::env::var("HOGO_REDACTION_NAME_INITIAL") {
            self.name_initial = val
                .parse()
                .context("Invalid HOGO_REDACTION_NAME_INITIAL value")?;
        }

        if let Ok(val) = std::env::var("HOGO_REDACTION_SHOW_REDACTED") {
            self.show_redacted = val
                .parse()
                .context("Invalid HOGO_REDACTION_SHOW_REDACTED value")?;
        }

        if let Ok(val) = std::env::var("HOGO_REDACTION_SUBSTITUTION") {
            self.substitution = SubstitutionMode::parse(&val)
                .with_context(|| format!("Invalid HOGO_REDACTION_SUBSTITUTION: {val}"))?;
        }

        Ok(())
    }
}

/// External (AI-assisted) detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Model asked first
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Model asked once when the primary call fails
    #[serde(default)]
    pub fallback_model: Option<String>,

    /// Hard limit for a single call
    #[serde(default = "default_assist_timeout")]
    pub timeout_seconds: u64,
}

fn default_primary_model() -> String {
    "default".to_string()
}

fn default_assist_timeout() -> u64 {
    30
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            primary_model: default_primary_model(),
            fallback_model: None,
            timeout_seconds: default_assist_timeout(),
        }
    }
}

impl AssistConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.primary_model.trim().is_empty() {
            anyhow::bail!("primary_model cannot be empty");
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            anyhow::bail!(
                "timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            );
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOGO_ASSIST_PRIMARY_MODEL") {
            self.primary_model = val;
        }

        if let Ok(val) = std::env::var("HOGO_ASSIST_FALLBACK_MODEL") {
            self.fallback_model = Some(val).filter(|v| !v.is_empty());
        }

        if let Ok(val) = std::env::var("HOGO_ASSIST_TIMEOUT_SECONDS") {
            self.timeout_seconds = val
                .parse()
                .context("Invalid HOGO_ASSIST_TIMEOUT_SECONDS value")?;
        }

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/hogo-audit.log")
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create audit log directory: {}", parent.display())
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOGO_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid HOGO_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("HOGO_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("HOGO_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid HOGO_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
