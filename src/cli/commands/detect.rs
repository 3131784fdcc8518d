//! Detect command implementation
//!
//! Prints the detections found in a document as JSON.

use super::InputArgs;
use crate::anonymization::anonymizer::Redactor;
use crate::anonymization::{DetectionReport, RedactionEngine};
use crate::config::HogoConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write a JSON detection report to this path
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Print a summary report to stderr
    #[arg(long)]
    pub summary: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config: &HogoConfig) -> anyhow::Result<i32> {
        let mut engine_config = config.engine_config();
        engine_config
            .detection
            .custom_keywords
            .extend(self.input.keywords.iter().cloned());
        let engine = RedactionEngine::new(engine_config)?;

        let text = self.input.read_text()?;
        let external = self.input.external_detections(&text)?;
        let outcome = engine.process_document(self.input.document_id(), &text, external)?;

        println!("{}", serde_json::to_string_pretty(&outcome.detections)?);

        if self.report.is_some() || self.summary {
            let mut report = DetectionReport::new();
            let redactor = Redactor::for_text(&outcome.normalized_text, &config.redaction);
            report.add_outcome(&outcome, &redactor);

            if let Some(ref path) = self.report {
                report.write_to_file(path)?;
                tracing::info!(path = %path.display(), "Detection report written");
            }
            if self.summary {
                eprint!("{}", report.format_console());
            }
        }

        Ok(0)
    }
}
