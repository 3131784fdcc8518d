//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "hogo.toml")]
    pub output: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Hogo configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Add company or project names to detection.custom_keywords");
                println!("  3. Validate configuration: hogo validate-config");
                println!("  4. Redact a document: hogo redact resume.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Hogo Configuration File
# PII detection and redaction for Japanese documents

[application]
log_level = "info"

[detection]
enable_names = true
custom_keywords = []
recent_birth_year_window = 20

[redaction]
keep_prefecture = false
name_initial = false
show_redacted = true
substitution = "global"

[audit]
enabled = false
log_path = "./audit/hogo-audit.log"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Hogo Configuration File
# PII detection and redaction for Japanese documents
#
# Any value may reference an environment variable with ${VAR_NAME}.
# Any key may be overridden with HOGO_<SECTION>_<KEY>, for example
# HOGO_REDACTION_KEEP_PREFECTURE=true.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Detection
# ============================================================================
[detection]
# Run the surname/given-name dictionary and label-proximity name detector
enable_names = true

# Literal keywords always flagged (company names, school names, project codes)
custom_keywords = [
    # "${HOGO_COMPANY_NAME}",
    # "株式会社サンプル",
]

# Unlabeled dates at most this many years before the reference year are
# treated as document dates rather than birthdays
recent_birth_year_window = 20

# Fixed reference year for the window (defaults to the current year)
# reference_year = 2025

# Replace the built-in pattern library
# pattern_library = "./patterns/ja_pii_patterns.toml"

# ============================================================================
# Redaction
# ============================================================================
[redaction]
# Keep the prefecture of addresses: 東京都[住所詳細]
keep_prefecture = false

# Replace names with initials: 田中 太郎 -> T.T. (when a reading is known)
name_initial = false

# Segments display replacements rather than originals
show_redacted = true

# global: replace every occurrence of each value
# positional: replace only resolved, non-overlapping spans
substitution = "global"

# ============================================================================
# External (AI-assisted) detection
# ============================================================================
[assist]
primary_model = "default"
# fallback_model = "small"
timeout_seconds = 30

# ============================================================================
# Audit trail (values are stored as SHA-256 hashes only)
# ============================================================================
[audit]
enabled = false
log_path = "./audit/hogo-audit.log"
json_format = true

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
