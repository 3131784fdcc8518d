//! Domain error types
//!
//! This module defines the error hierarchy for Hogo.
//! Detection and redaction themselves are total; these errors cover the
//! ambient surface around them (configuration, pattern libraries, I/O).

use thiserror::Error;

/// Main Hogo error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum HogoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (invalid TOML, unknown type, bad regex)
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// External detection source errors
    #[error("External detection error: {0}")]
    External(#[from] ExternalSourceError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while calling an external (AI-assisted) detection source
///
/// Payload parsing failures are not errors; see
/// [`crate::anonymization::external::ParseFailure`].
#[derive(Debug, Error)]
pub enum ExternalSourceError {
    /// The call did not finish within the configured timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The source reported a failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Both the primary and the fallback model failed
    #[error("Primary and fallback models both failed: {0}")]
    Exhausted(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HogoError {
    fn from(err: std::io::Error) -> Self {
        HogoError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HogoError {
    fn from(err: serde_json::Error) -> Self {
        HogoError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HogoError {
    fn from(err: toml::de::Error) -> Self {
        HogoError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hogo_error_display() {
        let err = HogoError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_pattern_library_error_display() {
        let err = HogoError::PatternLibrary("Duplicate rule id: email".to_string());
        assert_eq!(err.to_string(), "Pattern library error: Duplicate rule id: email");
    }

    #[test]
    fn test_external_error_conversion() {
        let external = ExternalSourceError::Timeout(30);
        let err: HogoError = external.into();
        assert!(matches!(err, HogoError::External(_)));
        assert!(err.to_string().contains("30 seconds"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: HogoError = io_err.into();
        assert!(matches!(err, HogoError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: HogoError = json_err.into();
        assert!(matches!(err, HogoError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: HogoError = toml_err.into();
        assert!(matches!(err, HogoError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
