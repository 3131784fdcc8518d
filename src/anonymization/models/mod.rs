//! Detection data models

pub mod detection;

pub use detection::{Category, Detection, DetectionType, RedactionOutcome, Source};
