//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Hogo using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Hogo - PII detection and redaction for Japanese documents
#[derive(Parser, Debug)]
#[command(name = "hogo")]
#[command(version, about, long_about = None)]
#[command(author = "Hogo Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = commands::DEFAULT_CONFIG_PATH, env = "HOGO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HOGO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print detections as JSON
    Detect(commands::detect::DetectArgs),

    /// Print the redacted text
    Redact(commands::redact::RedactArgs),

    /// Print text segments with detections marked
    Segments(commands::segments::SegmentsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
