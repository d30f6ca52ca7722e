//! Anthropic provider error types.

/// Specific error conditions for the Anthropic Messages API client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body could not be parsed
    #[display("Parse error: {}", _0)]
    Parse(String),
    /// Request could not be converted to the wire format
    #[display("Conversion error: {}", _0)]
    Conversion(String),
    /// Builder error while assembling the wire request
    #[display("Builder error: {}", _0)]
    Builder(String),
    /// Streaming response failed mid-stream
    #[display("Stream error: {}", _0)]
    Stream(String),
}

/// Error type for the Anthropic client.
///
/// # Examples
///
/// ```
/// use goldoni_error::{AnthropicError, AnthropicErrorKind};
///
/// let err = AnthropicError::new(AnthropicErrorKind::Api {
///     status: 529,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("529"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Anthropic Error: {} at line {} in {}", kind, line, file)]
pub struct AnthropicError {
    /// The specific error condition
    pub kind: AnthropicErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnthropicError {
    /// Create a new AnthropicError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnthropicErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
