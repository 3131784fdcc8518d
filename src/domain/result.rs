//! Result type alias for Hogo

use super::errors::HogoError;

/// Result type alias for Hogo operations
///
/// # Examples
///
/// ```
/// use hogo::domain::result::Result;
/// use hogo::domain::errors::HogoError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HogoError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HogoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(HogoError::Configuration("test error".to_string()));
        assert!(result.is_err());
    }
}
