//! Prompt registry error types.

/// Specific error conditions for prompt registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PromptErrorKind {
    /// Key does not name any registered prompt
    #[display("Unknown prompt key: '{}'", _0)]
    UnknownKey(String),
    /// Template text references a placeholder its key did not declare
    #[display("Template '{}' references undeclared placeholder '{{{}}}'", key, placeholder)]
    UndeclaredPlaceholder {
        /// Prompt key of the offending template
        key: String,
        /// The placeholder name found in the template text
        placeholder: String,
    },
    /// Template text is empty or whitespace
    #[display("Template '{}' is empty", _0)]
    EmptyTemplate(String),
    /// The placeholder scanning pattern failed to compile
    #[display("Invalid placeholder pattern: {}", _0)]
    InvalidPattern(String),
}

/// Error type for prompt registry operations.
///
/// Registry errors are configuration errors: they surface at registry
/// construction or key parsing, before any model call executes.
///
/// # Examples
///
/// ```
/// use goldoni_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::UnknownKey("no_such_prompt".to_string()));
/// assert!(format!("{}", err).contains("no_such_prompt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The specific error condition
    pub kind: PromptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
