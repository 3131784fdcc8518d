//! Detection data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Coarse grouping used for UI toggling and redaction policy dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Personal names (kanji, kana, initials)
    Name,
    /// Phone numbers, e-mail addresses, SNS accounts
    Contact,
    /// Postal codes and street addresses
    Address,
    /// Birth dates and national identifiers
    Personal,
    /// URLs
    Web,
    /// Company and school names
    Organization,
    /// Caller-supplied keywords
    Custom,
    /// Face photographs (flagged by the document layer)
    Photo,
}

impl Category {
    /// Stable lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Contact => "contact",
            Self::Address => "address",
            Self::Personal => "personal",
            Self::Web => "web",
            Self::Organization => "organization",
            Self::Custom => "custom",
            Self::Photo => "photo",
        }
    }

    /// Parse a category label as written in pattern libraries
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "contact" => Some(Self::Contact),
            "address" => Some(Self::Address),
            "personal" => Some(Self::Personal),
            "web" => Some(Self::Web),
            "organization" | "org" => Some(Self::Organization),
            "custom" => Some(Self::Custom),
            "photo" => Some(Self::Photo),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained detection kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionType {
    Email,
    Url,
    Phone,
    Postal,
    Birthday,
    Address,
    MyNumber,
    /// Name captured right after a 氏名/名前 label
    NameLabel,
    /// Kana reading captured after a フリガナ label
    NameKana,
    /// Surname + given name dictionary hit
    NameDict,
    /// Name found through label proximity
    NameContext,
    /// Name suggested by an external detector
    NameAi,
    SnsTwitter,
    SnsGithub,
    SnsLinkedin,
    SnsInstagram,
    SnsFacebook,
    /// SNS account suggested by an external detector
    SnsAi,
    Custom,
}

impl DetectionType {
    /// Stable snake_case label, also used as the id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Postal => "postal",
            Self::Birthday => "birthday",
            Self::Address => "address",
            Self::MyNumber => "my_number",
            Self::NameLabel => "name_label",
            Self::NameKana => "name_kana",
            Self::NameDict => "name_dict",
            Self::NameContext => "name_context",
            Self::NameAi => "name_ai",
            Self::SnsTwitter => "sns_twitter",
            Self::SnsGithub => "sns_github",
            Self::SnsLinkedin => "sns_linkedin",
            Self::SnsInstagram => "sns_instagram",
            Self::SnsFacebook => "sns_facebook",
            Self::SnsAi => "sns_ai",
            Self::Custom => "custom",
        }
    }

    /// Parse a type label as written in pattern libraries
    pub fn parse(s: &str) -> Option<Self> {
        let parsed = match s.to_lowercase().as_str() {
            "email" => Self::Email,
            "url" => Self::Url,
            "phone" => Self::Phone,
            "postal" => Self::Postal,
            "birthday" => Self::Birthday,
            "address" => Self::Address,
            "my_number" | "mynumber" => Self::MyNumber,
            "name_label" => Self::NameLabel,
            "name_kana" => Self::NameKana,
            "name_dict" => Self::NameDict,
            "name_context" => Self::NameContext,
            "name_ai" => Self::NameAi,
            "sns_twitter" => Self::SnsTwitter,
            "sns_github" => Self::SnsGithub,
            "sns_linkedin" => Self::SnsLinkedin,
            "sns_instagram" => Self::SnsInstagram,
            "sns_facebook" => Self::SnsFacebook,
            "sns_ai" => Self::SnsAi,
            "custom" => Self::Custom,
            _ => return None,
        };
        Some(parsed)
    }

    /// Whether this type is one of the SNS handle kinds
    pub fn is_sns(&self) -> bool {
        matches!(
            self,
            Self::SnsTwitter
                | Self::SnsGithub
                | Self::SnsLinkedin
                | Self::SnsInstagram
                | Self::SnsFacebook
                | Self::SnsAi
        )
    }
}

impl fmt::Display for DetectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Pattern rule match
    Regex,
    /// Dictionary or keyword match
    Dict,
    /// Heuristic guess (label proximity, kanji runs)
    Heuristic,
    /// Externally suggested and validated
    Ai,
}

/// A single flagged span of text plus its classification metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Unique within one detection batch
    pub id: String,
    /// Fine-grained kind
    #[serde(rename = "type")]
    pub detection_type: DetectionType,
    /// Coarse grouping
    pub category: Category,
    /// Literal substring of the normalized text
    pub value: String,
    /// Provenance
    pub source: Source,
    /// Advisory score in (0, 1]
    pub confidence: f32,
    /// Toggled by consumers, read at redaction time
    pub enabled: bool,
}

impl Detection {
    /// Create a new enabled detection with confidence 1.0
    pub fn new(
        id: impl Into<String>,
        detection_type: DetectionType,
        category: Category,
        value: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            id: id.into(),
            detection_type,
            category,
            value: value.into(),
            source,
            confidence: 1.0,
            enabled: true,
        }
    }

    /// Builder-style confidence setter
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.set_confidence(confidence);
        self
    }

    /// Set the confidence score, kept inside (0, 1]
    pub fn set_confidence(&mut self, confidence: f32) {
        self.confidence = confidence.clamp(f32::EPSILON, 1.0);
    }

    /// Key used for cross-source deduplication
    pub fn dedup_key(&self) -> (Category, &str) {
        (self.category, self.value.as_str())
    }

    /// Number of characters in the value
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Result of processing one document through the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionOutcome {
    /// Caller-provided document identifier
    pub document_id: String,
    /// Normalized source text
    pub normalized_text: String,
    /// Redacted rendering (equals the normalized text in dry-run mode)
    pub redacted_text: String,
    /// Detections that were considered
    pub detections: Vec<Detection>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of processing
    pub timestamp: DateTime<Utc>,
    /// Detection counts by category
    pub stats_by_category: HashMap<Category, usize>,
}

impl RedactionOutcome {
    /// Create a new outcome, computing per-category statistics
    pub fn new(
        document_id: String,
        normalized_text: String,
        redacted_text: String,
        detections: Vec<Detection>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_category = HashMap::new();
        for detection in &detections {
            *stats_by_category.entry(detection.category).or_insert(0) += 1;
        }

        Self {
            document_id,
            normalized_text,
            redacted_text,
            detections,
            processing_time_ms,
            timestamp: Utc::now(),
            stats_by_category,
        }
    }

    /// Get total number of detections
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
