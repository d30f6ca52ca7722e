//! Top-level error wrapper types.

use crate::{AnthropicError, ConfigError, HttpError, PromptError, SessionError};

/// The foundation error enum covering every Goldoni subsystem.
///
/// # Examples
///
/// ```
/// use goldoni_error::{GoldoniError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: GoldoniError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GoldoniErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt registry error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Orchestration session error
    #[from(SessionError)]
    Session(SessionError),
    /// Anthropic provider error
    #[from(AnthropicError)]
    Anthropic(AnthropicError),
}

/// Goldoni error with kind discrimination.
///
/// # Examples
///
/// ```
/// use goldoni_error::{ConfigError, GoldoniResult};
///
/// fn might_fail() -> GoldoniResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Goldoni Error: {}", _0)]
pub struct GoldoniError(Box<GoldoniErrorKind>);

impl GoldoniError {
    /// Create a new error from a kind.
    pub fn new(kind: GoldoniErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GoldoniErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GoldoniErrorKind
impl<T> From<T> for GoldoniError
where
    T: Into<GoldoniErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Goldoni operations.
///
/// # Examples
///
/// ```
/// use goldoni_error::{GoldoniResult, HttpError};
///
/// fn fetch_data() -> GoldoniResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type GoldoniResult<T> = std::result::Result<T, GoldoniError>;
