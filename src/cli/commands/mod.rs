//! CLI command implementations
//!
//! This module contains all CLI command implementations plus the input
//! handling shared by `detect`, `redact` and `segments`.

pub mod detect;
pub mod init;
pub mod redact;
pub mod segments;
pub mod validate;

use crate::anonymization::external::{parse_external_payload, validate_external};
use crate::anonymization::models::Detection;
use crate::config::{default_config, load_config, HogoConfig};
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration path used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "hogo.toml";

/// Input selection shared by the text-processing commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text file to process, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Extra keywords to flag (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Pre-fetched external detection payload (`[{"type", "value"}]`)
    #[arg(long, value_name = "FILE")]
    pub assist_file: Option<PathBuf>,
}

impl InputArgs {
    /// Document id used in logs, reports and the audit trail
    pub fn document_id(&self) -> &str {
        if self.input == "-" {
            "stdin"
        } else {
            &self.input
        }
    }

    /// Read the input text
    pub fn read_text(&self) -> anyhow::Result<String> {
        if self.input == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            return Ok(text);
        }

        std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input file {}", self.input))
    }

    /// External detections from `--assist-file`, validated against `text`
    ///
    /// An unusable payload is logged and ignored.
    pub fn external_detections(&self, text: &str) -> anyhow::Result<Option<Vec<Detection>>> {
        let Some(ref path) = self.assist_file else {
            return Ok(None);
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read assist file {}", path.display()))?;

        match parse_external_payload(&raw) {
            Ok(items) => Ok(Some(validate_external(&items, text))),
            Err(failure) => {
                tracing::warn!(
                    path = %path.display(),
                    reason = failure.reason(),
                    "Ignoring unusable external detection payload"
                );
                Ok(None)
            }
        }
    }
}

/// Load `path`, falling back to defaults when the default file is absent
pub fn resolve_config(path: &str) -> crate::domain::Result<HogoConfig> {
    if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
        return default_config();
    }
    load_config(path)
}
