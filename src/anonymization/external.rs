//! Externally suggested detections (AI-assisted)
//!
//! The external source is asked for `[{ "type": ..., "value": ... }]` items.
//! Its raw reply is parsed leniently (code fences and surrounding prose are
//! tolerated), then every item is checked against the document before it
//! becomes a [`Detection`]. Calls are bounded by a timeout and retried once
//! against a fallback model.

use crate::anonymization::config::AssistConfig;
use crate::anonymization::models::{Category, Detection, DetectionType, Source};
use crate::anonymization::normalizer::normalize;
use crate::domain::{ExternalSourceError, HogoError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const NAME_AI_CONFIDENCE: f32 = 0.90;
pub const SNS_AI_CONFIDENCE: f32 = 0.95;

/// One item of an external detection payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalItem {
    /// `person_name` or `sns_account`
    #[serde(rename = "type")]
    pub item_type: String,
    pub value: String,
}

/// Why an external payload could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("payload is empty")]
    Empty,
    #[error("payload contains no JSON")]
    NoJson,
    #[error("payload JSON is not an array")]
    NotArray,
    #[error("payload JSON is malformed: {0}")]
    JsonParse(String),
}

impl ParseFailure {
    /// Stable reason label
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NoJson => "no_json",
            Self::NotArray => "not_array",
            Self::JsonParse(_) => "json_parse",
        }
    }
}

/// Parse a raw external reply into items
///
/// Elements that are not `{type, value}` objects are skipped.
pub fn parse_external_payload(raw: &str) -> std::result::Result<Vec<ExternalItem>, ParseFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let json = extract_json(trimmed).ok_or(ParseFailure::NoJson)?;
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ParseFailure::JsonParse(e.to_string()))?;

    let serde_json::Value::Array(elements) = value else {
        return Err(ParseFailure::NotArray);
    };

    Ok(elements
        .into_iter()
        .filter_map(|element| serde_json::from_value::<ExternalItem>(element).ok())
        .collect())
}

/// Outermost JSON array (or object, for error reporting) in `text`
fn extract_json(text: &str) -> Option<&str> {
    let array = text.find('[').zip(text.rfind(']')).filter(|(s, e)| s < e);
    let object = text.find('{').zip(text.rfind('}')).filter(|(s, e)| s < e);

    let (start, end) = match (array, object) {
        (Some(a), Some(o)) if o.0 < a.0 => o,
        (Some(a), _) => a,
        (None, Some(o)) => o,
        (None, None) => return None,
    };
    Some(&text[start..=end])
}

/// Turn validated items into detections over `text`
///
/// Items of unknown type, shorter than 2 characters, or not occurring
/// literally in the normalized text are dropped.
pub fn validate_external(items: &[ExternalItem], text: &str) -> Vec<Detection> {
    let normalized = normalize(text);
    let mut detections = Vec::new();
    let mut rejected = 0usize;

    for item in items {
        let (detection_type, category, confidence) = match item.item_type.trim() {
            "person_name" => (DetectionType::NameAi, Category::Name, NAME_AI_CONFIDENCE),
            "sns_account" => (DetectionType::SnsAi, Category::Contact, SNS_AI_CONFIDENCE),
            _ => {
                rejected += 1;
                continue;
            }
        };

        let value = normalize(&item.value).trim().to_string();
        if value.chars().count() < 2 || !normalized.contains(&value) {
            rejected += 1;
            continue;
        }

        let id = format!("{detection_type}_{}", detections.len());
        detections.push(
            Detection::new(id, detection_type, category, value, Source::Ai).with_confidence(confidence),
        );
    }

    tracing::debug!(accepted = detections.len(), rejected, "External items validated");
    detections
}

/// Client for an external detection model
#[async_trait]
pub trait ExternalDetectionClient: Send + Sync {
    /// Ask `model` for PII in `text` and return its raw reply
    async fn complete(&self, model: &str, text: &str) -> anyhow::Result<String>;
}

/// Timeout-bounded external detection with one fallback retry
pub struct AssistedDetection<C> {
    client: C,
    config: AssistConfig,
}

impl<C: ExternalDetectionClient> AssistedDetection<C> {
    pub fn new(client: C, config: AssistConfig) -> Self {
        Self { client, config }
    }

    /// Fetch items for `text`, retrying once with the fallback model
    pub async fn fetch(&self, text: &str) -> Result<Vec<ExternalItem>> {
        let primary = self.config.primary_model.as_str();
        let first = match self.attempt(primary, text).await {
            Ok(items) => return Ok(items),
            Err(reason) => reason,
        };

        let Some(fallback) = self.config.fallback_model.as_deref() else {
            return Err(HogoError::External(ExternalSourceError::RequestFailed(first)));
        };

        crate::log_assist_retry!(primary, fallback, first);
        self.attempt(fallback, text).await.map_err(|second| {
            HogoError::External(ExternalSourceError::Exhausted(format!(
                "primary: {first}; fallback: {second}"
            )))
        })
    }

    /// Fetch and validate in one step
    pub async fn detect(&self, text: &str) -> Result<Vec<Detection>> {
        let items = self.fetch(text).await?;
        Ok(validate_external(&items, text))
    }

    async fn attempt(&self, model: &str, text: &str) -> std::result::Result<Vec<ExternalItem>, String> {
        let limit = Duration::from_secs(self.config.timeout_seconds);
        let raw = match tokio::time::timeout(limit, self.client.complete(model, text)).await {
            Err(_) => return Err(ExternalSourceError::Timeout(self.config.timeout_seconds).to_string()),
            Ok(Err(e)) => return Err(ExternalSourceError::RequestFailed(e.to_string()).to_string()),
            Ok(Ok(raw)) => raw,
        };

        parse_external_payload(&raw).map_err(|failure| {
            tracing::debug!(model, reason = failure.reason(), "Unusable external payload");
            failure.reason().to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", ParseFailure::Empty ; "empty")]
    #[test_case("   \n ", ParseFailure::Empty ; "whitespace")]
    #[test_case("名前は見つかりませんでした", ParseFailure::NoJson ; "prose only")]
    #[test_case(r#"{"type":"person_name","value":"田中"}"#, ParseFailure::NotArray ; "object")]
    fn test_parse_failures(raw: &str, expected: ParseFailure) {
        assert_eq!(parse_external_payload(raw), Err(expected));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_external_payload("[{\"type\": }]").unwrap_err();
        assert_eq!(err.reason(), "json_parse");
    }

    #[test]
    fn test_parse_fenced_payload() {
        let raw = "```json\n[{\"type\":\"person_name\",\"value\":\"田中 太郎\"}, 42]\n```";
        let items = parse_external_payload(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value, "田中 太郎");
    }

    #[test]
    fn test_validate_external() {
        let text = "担当：田中 太郎\nX: taro_dev";
        let items = vec![
            ExternalItem { item_type: "person_name".into(), value: "田中 太郎".into() },
            ExternalItem { item_type: "sns_account".into(), value: "taro_dev".into() },
            ExternalItem { item_type: "person_name".into(), value: "山田 花子".into() },
            ExternalItem { item_type: "person_name".into(), value: "田".into() },
            ExternalItem { item_type: "company".into(), value: "田中 太郎".into() },
        ];

        let detections = validate_external(&items, text);
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].detection_type, DetectionType::NameAi);
        assert_eq!(detections[0].source, Source::Ai);
        assert!((detections[0].confidence - NAME_AI_CONFIDENCE).abs() < f32::EPSILON);
        assert_eq!(detections[1].category, Category::Contact);
    }

    #[test]
    fn test_validate_normalizes_values() {
        let items = vec![ExternalItem {
            item_type: "sns_account".into(),
            value: "ｔａｒｏ＿ｄｅｖ".into(),
        }];
        // fullwidth low line is not folded; only letters and digits are
        assert!(validate_external(&items, "taro_dev").is_empty());

        let items = vec![ExternalItem {
            item_type: "sns_account".into(),
            value: "ｔａｒｏdev".into(),
        }];
        assert_eq!(validate_external(&items, "taro dev / tarodev").len(), 1);
    }
}
