//! Result type alias for Globex

use super::errors::GlobexError;

/// Result type alias for Globex operations
///
/// # Examples
///
/// ```
/// use globex::domain::result::Result;
/// use globex::domain::errors::GlobexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(GlobexError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, GlobexError>;
