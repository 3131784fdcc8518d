//! Segments command implementation
//!
//! Prints the text split into plain and flagged segments as JSON, for
//! viewers that render detections inline.

use super::InputArgs;
use crate::anonymization::spans::Segment;
use crate::anonymization::RedactionEngine;
use crate::config::HogoConfig;
use clap::Args;
use serde::Serialize;

/// Arguments for the segments command
#[derive(Args, Debug)]
pub struct SegmentsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Display replacements (true) or originals (false); defaults to configuration
    #[arg(long, value_name = "BOOL")]
    pub show_redacted: Option<bool>,
}

#[derive(Debug, Serialize)]
struct SegmentView<'a> {
    kind: &'static str,
    start: usize,
    end: usize,
    display: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detection_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replacement: Option<&'a str>,
}

impl<'a> SegmentView<'a> {
    fn new(segment: &Segment<'a>, show_redacted: bool) -> Self {
        let display = segment.display(show_redacted);
        match *segment {
            Segment::Text { start, end, .. } => Self {
                kind: "text",
                start,
                end,
                display,
                detection_id: None,
                replacement: None,
            },
            Segment::Detection {
                start,
                end,
                replacement,
                detection,
                ..
            } => Self {
                kind: "detection",
                start,
                end,
                display,
                detection_id: Some(detection.id.as_str()),
                replacement: Some(replacement),
            },
        }
    }
}

impl SegmentsArgs {
    /// Execute the segments command
    pub async fn execute(&self, config: &HogoConfig) -> anyhow::Result<i32> {
        let mut engine_config = config.engine_config();
        engine_config
            .detection
            .custom_keywords
            .extend(self.input.keywords.iter().cloned());
        let show_redacted = self
            .show_redacted
            .unwrap_or(engine_config.redaction.show_redacted);

        let engine = RedactionEngine::new(engine_config)?;

        let text = self.input.read_text()?;
        let external = self.input.external_detections(&text)?;
        let outcome = engine.process_document(self.input.document_id(), &text, external)?;

        let segmentation = engine.segments(&outcome.normalized_text, &outcome.detections);
        let views: Vec<SegmentView<'_>> = segmentation
            .segments()
            .map(|segment| SegmentView::new(&segment, show_redacted))
            .collect();

        println!("{}", serde_json::to_string_pretty(&views)?);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::config::RedactionOptions;
    use crate::anonymization::models::{Category, Detection, DetectionType, Source};
    use crate::anonymization::resolve_segments;

    #[test]
    fn test_segment_view_shape() {
        let email = Detection::new("email_0", DetectionType::Email, Category::Contact, "a@b.jp", Source::Regex);
        let segmentation = resolve_segments("連絡 a@b.jp", &[email], &RedactionOptions::default());

        let views: Vec<SegmentView<'_>> = segmentation
            .segments()
            .map(|s| SegmentView::new(&s, false))
            .collect();
        let json = serde_json::to_value(&views).unwrap();

        assert_eq!(json[0]["kind"], "text");
        assert!(json[0].get("replacement").is_none());
        assert_eq!(json[1]["kind"], "detection");
        assert_eq!(json[1]["display"], "a@b.jp");
        assert_eq!(json[1]["replacement"], "[メールアドレス]");
        assert_eq!(json[1]["detection_id"], "email_0");
    }
}
