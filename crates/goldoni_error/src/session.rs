//! Session error types.

use goldoni_core::Speaker;

/// Specific error conditions for orchestration sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// Session parameters rejected at construction
    #[display("Malformed configuration: {}", _0)]
    MalformedConfiguration(String),
    /// A model invocation failed; the session aborts without retry
    #[display("Agent invocation failed for {} in round {}: {}", speaker, round, message)]
    AgentInvocation {
        /// The agent whose invocation failed
        speaker: Speaker,
        /// The round in which generation stopped
        round: u32,
        /// Provider error description
        message: String,
    },
    /// The initial draft came back empty, so there is nothing to critique
    #[display("Initial draft was empty")]
    EmptyDraft,
}

/// Error type for orchestration sessions.
///
/// All session errors are fatal to the session: no retry, no partial
/// artifact. Turns completed before the failure remain available on the
/// session value as a partial transcript.
///
/// # Examples
///
/// ```
/// use goldoni_core::Speaker;
/// use goldoni_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::AgentInvocation {
///     speaker: Speaker::Director,
///     round: 2,
///     message: "timeout".to_string(),
/// });
/// assert!(format!("{}", err).contains("round 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
