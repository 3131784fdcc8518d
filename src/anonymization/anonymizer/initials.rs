//! Name-to-initials policy

use super::ReplacementPolicy;
use crate::anonymization::models::{Category, Detection};
use crate::anonymization::reading::{name_to_initial, ReadingMap};

/// Replaces names with initials, using furigana readings when available
pub struct InitialsPolicy {
    readings: ReadingMap,
}

impl InitialsPolicy {
    pub fn new(readings: ReadingMap) -> Self {
        Self { readings }
    }

    /// Build the reading map from the document itself
    pub fn for_text(text: &str) -> Self {
        Self::new(ReadingMap::build(text))
    }
}

impl ReplacementPolicy for InitialsPolicy {
    fn name(&self) -> &'static str {
        "initials"
    }

    fn replacement(&self, detection: &Detection) -> Option<String> {
        if detection.category != Category::Name {
            return None;
        }
        let initials = name_to_initial(&detection.value, &self.readings);
        (!initials.is_empty()).then_some(initials)
    }
}
