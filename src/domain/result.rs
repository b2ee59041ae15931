//! Result type alias for mcpdump

use super::errors::DumpError;

/// Result type alias for mcpdump operations
///
/// # Examples
///
/// ```
/// use mcpdump::domain::result::Result;
/// use mcpdump::domain::errors::DumpError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DumpError::Configuration("bad value".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DumpError>;
