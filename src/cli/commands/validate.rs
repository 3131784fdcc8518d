//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Hogo configuration file.

use crate::anonymization::detector::patterns::PatternRegistry;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates every section
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let registry = match config.detection.pattern_library {
            Some(ref path) => PatternRegistry::from_file(path),
            None => PatternRegistry::default_patterns(),
        };
        let rule_count = match registry {
            Ok(registry) => registry.all_rules().len(),
            Err(e) => {
                println!("❌ Pattern library failed to load");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Pattern Library: {}",
            config
                .detection
                .pattern_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!("  Pattern Rules: {rule_count}");
        println!("  Name Detection: {}", config.detection.enable_names);
        println!("  Custom Keywords: {}", config.detection.custom_keywords.len());
        println!(
            "  Birth Year Window: {} years",
            config.detection.recent_birth_year_window
        );
        println!("  Keep Prefecture: {}", config.redaction.keep_prefecture);
        println!("  Name Initials: {}", config.redaction.name_initial);
        println!("  Substitution: {:?}", config.redaction.substitution);
        println!(
            "  Assist Models: {} / {}",
            config.assist.primary_model,
            config.assist.fallback_model.as_deref().unwrap_or("none")
        );
        println!("  Audit Enabled: {}", config.audit.enabled);
        println!();

        Ok(0)
    }
}
