//! Redact command implementation
//!
//! Prints the redacted text of a document.

use super::InputArgs;
use crate::anonymization::config::SubstitutionMode;
use crate::anonymization::RedactionEngine;
use crate::config::HogoConfig;
use clap::Args;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep the prefecture of addresses
    #[arg(long)]
    pub keep_prefecture: bool,

    /// Replace names with initials
    #[arg(long)]
    pub name_initial: bool,

    /// Substitute only resolved spans instead of every occurrence
    #[arg(long)]
    pub positional: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config: &HogoConfig) -> anyhow::Result<i32> {
        let mut engine_config = config.engine_config();
        engine_config
            .detection
            .custom_keywords
            .extend(self.input.keywords.iter().cloned());
        engine_config.redaction.keep_prefecture |= self.keep_prefecture;
        engine_config.redaction.name_initial |= self.name_initial;
        if self.positional {
            engine_config.redaction.substitution = SubstitutionMode::Positional;
        }

        let engine = RedactionEngine::new(engine_config)?;

        let text = self.input.read_text()?;
        let external = self.input.external_detections(&text)?;
        let outcome = engine.process_document(self.input.document_id(), &text, external)?;

        print!("{}", outcome.redacted_text);
        if !outcome.redacted_text.ends_with('\n') {
            println!();
        }

        Ok(0)
    }
}
