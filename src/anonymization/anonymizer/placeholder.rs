//! Placeholder table and prefecture-preserving address masking

use super::ReplacementPolicy;
use crate::anonymization::models::{Detection, DetectionType};
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder for values without a more specific label
pub const GENERIC_PLACEHOLDER: &str = "[非公開]";
/// Suffix written after a kept prefecture
pub const ADDRESS_DETAIL_PLACEHOLDER: &str = "[住所詳細]";

static RE_PREFECTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:北海道|東京都|京都府|大阪府|\p{Han}{2,3}県)").expect("prefecture regex")
});

/// Canonical bracketed label for a detection type
pub fn placeholder_for(detection_type: DetectionType) -> &'static str {
    match detection_type {
        DetectionType::Email => "[メールアドレス]",
        DetectionType::Url => "[URL]",
        DetectionType::Phone => "[電話番号]",
        DetectionType::Postal => "[郵便番号]",
        DetectionType::Birthday => "[生年月日]",
        DetectionType::Address => "[住所]",
        DetectionType::MyNumber => "[マイナンバー]",
        DetectionType::NameKana => "[フリガナ]",
        DetectionType::NameLabel
        | DetectionType::NameDict
        | DetectionType::NameContext
        | DetectionType::NameAi => "[氏名]",
        t if t.is_sns() => "[SNSアカウント]",
        _ => GENERIC_PLACEHOLDER,
    }
}

/// Leading prefecture token of an address
///
/// ```
/// use hogo::anonymization::anonymizer::extract_prefecture;
///
/// assert_eq!(extract_prefecture("東京都渋谷区神宮前3-14-5"), Some("東京都"));
/// assert_eq!(extract_prefecture("神奈川県横浜市1-1"), Some("神奈川県"));
/// assert_eq!(extract_prefecture("渋谷区神宮前3-14-5"), None);
/// ```
pub fn extract_prefecture(address: &str) -> Option<&str> {
    RE_PREFECTURE.find(address.trim_start()).map(|m| m.as_str())
}

/// Keeps the prefecture and masks the rest of an address
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefecturePolicy;

impl ReplacementPolicy for PrefecturePolicy {
    fn name(&self) -> &'static str {
        "prefecture"
    }

    fn replacement(&self, detection: &Detection) -> Option<String> {
        if detection.detection_type != DetectionType::Address {
            return None;
        }
        Some(match extract_prefecture(&detection.value) {
            Some(prefecture) => format!("{prefecture}{ADDRESS_DETAIL_PLACEHOLDER}"),
            None => placeholder_for(DetectionType::Address).to_string(),
        })
    }
}

/// Per-type placeholder; always produces a replacement
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderPolicy;

impl ReplacementPolicy for PlaceholderPolicy {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn replacement(&self, detection: &Detection) -> Option<String> {
        Some(placeholder_for(detection.detection_type).to_string())
    }
}
