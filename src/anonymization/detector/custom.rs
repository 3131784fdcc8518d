//! Literal matcher for caller-supplied keywords

use super::PiiDetector;
use crate::anonymization::models::{Category, Detection, DetectionType, Source};
use crate::anonymization::normalizer::normalize;

/// Flags user-listed keywords (company names, project codes, ...) verbatim
#[derive(Debug, Default, Clone)]
pub struct KeywordDetector {
    keywords: Vec<String>,
}

impl KeywordDetector {
    /// Keywords are normalized the same way as the text they are matched against
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = normalize(keyword.as_ref()).trim().to_string();
            if keyword.chars().count() < 2 || normalized.contains(&keyword) {
                continue;
            }
            normalized.push(keyword);
        }
        Self { keywords: normalized }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl PiiDetector for KeywordDetector {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn detect(&self, text: &str) -> Vec<Detection> {
        self.keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .enumerate()
            .map(|(i, keyword)| {
                Detection::new(
                    format!("custom_{i}"),
                    DetectionType::Custom,
                    Category::Custom,
                    keyword.as_str(),
                    Source::Dict,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_short_and_missing_keywords() {
        let detector = KeywordDetector::new(["", "A", "サンプル商事", "存在しない語"]);
        assert_eq!(detector.keywords().len(), 2);

        let detections = detector.detect("前職：サンプル商事 営業部");
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].value, "サンプル商事");
        assert_eq!(detections[0].category, Category::Custom);
        assert_eq!(detections[0].confidence, 1.0);
    }

    #[test]
    fn test_keywords_are_normalized() {
        let detector = KeywordDetector::new(["ＡＢＣ社"]);
        let detections = detector.detect("勤務先 ABC社");
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].value, "ABC社");
    }
}
