//! Combining detections from every source
//!
//! Detections are deduplicated on `(category, value)`, keeping the first
//! occurrence, so source order decides which kind wins: pattern rules, then
//! names, then custom keywords, then externally suggested items.

use crate::anonymization::detector::{KeywordDetector, NameDetector, PatternDetector, PiiDetector};
use crate::anonymization::models::{Category, Detection};
use crate::anonymization::normalizer::normalize;
use std::collections::HashSet;
use std::sync::LazyLock;

static STANDARD_MERGER: LazyLock<DetectionMerger> = LazyLock::new(DetectionMerger::default);

/// Runs an ordered set of detectors and merges their output
pub struct DetectionMerger {
    detectors: Vec<Box<dyn PiiDetector>>,
}

impl DetectionMerger {
    /// Create a merger over detectors in priority order
    pub fn new(detectors: Vec<Box<dyn PiiDetector>>) -> Self {
        Self { detectors }
    }

    /// Names of the configured detectors, in priority order
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Detect over already-normalized text
    pub fn detect_normalized(&self, normalized: &str, custom_keywords: &[String]) -> Vec<Detection> {
        let mut all = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(normalized);
            tracing::debug!(detector = detector.name(), count = found.len(), "Detector finished");
            all.extend(found);
        }

        let keywords = KeywordDetector::new(custom_keywords);
        if !keywords.is_empty() {
            all.extend(keywords.detect(normalized));
        }

        let mut merged = dedupe(all);
        assign_unique_ids(&mut merged);
        merged
    }

    /// Normalize `text` and run every detector plus the keyword matcher
    pub fn detect_all(&self, text: &str, custom_keywords: &[String]) -> Vec<Detection> {
        self.detect_normalized(&normalize(text), custom_keywords)
    }
}

impl Default for DetectionMerger {
    fn default() -> Self {
        Self::new(vec![
            Box::new(PatternDetector::default()),
            Box::new(NameDetector::new()),
        ])
    }
}

/// Detect PII in `text` with the built-in rule set
///
/// Values refer to the normalized form of `text`.
pub fn detect_all(text: &str, custom_keywords: &[String]) -> Vec<Detection> {
    STANDARD_MERGER.detect_all(text, custom_keywords)
}

/// Append external detections whose `(category, value)` is not yet present
///
/// External values are trusted to be substrings of the same normalized text.
pub fn merge_detections(base: Vec<Detection>, external: Vec<Detection>) -> Vec<Detection> {
    let before = base.len();
    let mut merged = dedupe(base.into_iter().chain(external).collect());
    assign_unique_ids(&mut merged);
    tracing::debug!(added = merged.len().saturating_sub(before), "External detections merged");
    merged
}

/// Keep the first detection for each `(category, value)` pair
pub fn dedupe(detections: Vec<Detection>) -> Vec<Detection> {
    let mut seen: HashSet<(Category, String)> = HashSet::new();
    detections
        .into_iter()
        .filter(|d| d.char_len() >= 2)
        .filter(|d| seen.insert((d.category, d.value.clone())))
        .collect()
}

/// Make ids unique by suffixing repeats with `_2`, `_3`, ...
pub fn assign_unique_ids(detections: &mut [Detection]) {
    let mut used: HashSet<String> = HashSet::new();
    for detection in detections.iter_mut() {
        if used.insert(detection.id.clone()) {
            continue;
        }
        let base = detection.id.clone();
        let mut n = 2;
        while !used.insert(format!("{base}_{n}")) {
            n += 1;
        }
        detection.id = format!("{base}_{n}");
    }
}
