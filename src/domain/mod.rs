//! Domain error and result types for Hogo.
//!
//! Detection-related models (detections, categories, sources) live in
//! [`crate::anonymization::models`]; this module holds the error hierarchy
//! shared by configuration loading, logging and the CLI.
//!
//! ```rust
//! use hogo::domain::{HogoError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(HogoError::Configuration("empty input".to_string()))
//! }
//! assert!(example().is_err());
//! ```

pub mod errors;
pub mod result;

pub use errors::{ExternalSourceError, HogoError};
pub use result::Result;
