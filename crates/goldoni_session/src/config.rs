//! Session configuration types.
//!
//! Configuration is explicit and immutable: every session receives its own
//! config value at construction and never reads ambient or global state,
//! so concurrent sessions cannot interfere and tests stay deterministic.

use goldoni_error::{SessionError, SessionErrorKind};

/// Smallest supported collaboration round cap.
pub const MIN_ROUNDS: u32 = 1;
/// Largest supported collaboration round cap.
pub const MAX_ROUNDS: u32 = 8;
/// Largest supported number of critique iterations.
pub const MAX_CRITIQUE_ROUNDS: u32 = 8;

const DEFAULT_ROUNDS: u32 = 5;
const DEFAULT_CRITIQUE_ROUNDS: u32 = 2;

// Token budgets. Discussion rounds get the full ceiling so a draft or
// critique is never cut short; critique notes are deliberately small.
const DEFAULT_MAX_TOKENS: u32 = 64_000;
const DEFAULT_CRITIC_MAX_TOKENS: u32 = 1_024;

// Continuation calls allowed when a final script hits the token ceiling.
const DEFAULT_MAX_CONTINUATIONS: u32 = 4;

/// Configuration for a Writer/Director collaboration session.
///
/// # Examples
///
/// ```
/// use goldoni_session::CollaborationConfig;
///
/// let config = CollaborationConfig::builder()
///     .genre("Comedy")
///     .theme("a lighthouse keeper who hates the sea")
///     .tone("Wistful")
///     .rounds(3u32)
///     .build()
///     .unwrap();
/// assert_eq!(*config.rounds(), 3);
/// assert_eq!(config.language(), "English");
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct CollaborationConfig {
    /// Genre of the play (e.g. "Comedy", "Thriller")
    genre: String,
    /// Theme or premise of the play
    theme: String,
    /// Overall tone (e.g. "Satirical and absurd")
    tone: String,
    /// Output language for every word of the script
    #[builder(default = "String::from(\"English\")")]
    language: String,
    /// Hard cap on discussion rounds (bounded compute)
    #[builder(default = "DEFAULT_ROUNDS")]
    rounds: u32,
    /// Model identifier override; the driver's default when `None`
    #[builder(default, setter(strip_option))]
    model: Option<String>,
    /// Token ceiling per model invocation
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
    /// Continuation calls allowed when the final script is truncated
    #[builder(default = "DEFAULT_MAX_CONTINUATIONS")]
    max_continuations: u32,
}

impl CollaborationConfig {
    /// Create a builder for a collaboration config.
    pub fn builder() -> CollaborationConfigBuilder {
        CollaborationConfigBuilder::default()
    }

    /// Check bounds. Called at session construction, before any turn.
    pub(crate) fn validate(&self) -> Result<(), SessionError> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(SessionError::new(SessionErrorKind::MalformedConfiguration(
                format!(
                    "round cap must be in {}..={}, got {}",
                    MIN_ROUNDS, MAX_ROUNDS, self.rounds
                ),
            )));
        }
        Ok(())
    }
}

/// Configuration for a Playwright/Critic sketch session.
///
/// # Examples
///
/// ```
/// use goldoni_session::SketchConfig;
///
/// let config = SketchConfig::builder()
///     .theme("a wizard who is afraid of magic")
///     .critique_rounds(0u32)
///     .build()
///     .unwrap();
/// assert_eq!(*config.critique_rounds(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct SketchConfig {
    /// Theme or premise of the sketch
    theme: String,
    /// Output language for every word of the script
    #[builder(default = "String::from(\"English\")")]
    language: String,
    /// Number of critique/revision iterations; zero means the initial
    /// draft is the final artifact
    #[builder(default = "DEFAULT_CRITIQUE_ROUNDS")]
    critique_rounds: u32,
    /// Model identifier override; the driver's default when `None`
    #[builder(default, setter(strip_option))]
    model: Option<String>,
    /// Token ceiling for drafts and revisions
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Token ceiling for critique notes (bullet notes stay short)
    #[builder(default = "DEFAULT_CRITIC_MAX_TOKENS")]
    critic_max_tokens: u32,
    /// Continuation calls allowed when a draft is truncated
    #[builder(default = "DEFAULT_MAX_CONTINUATIONS")]
    max_continuations: u32,
}

impl SketchConfig {
    /// Create a builder for a sketch config.
    pub fn builder() -> SketchConfigBuilder {
        SketchConfigBuilder::default()
    }

    /// Check bounds. Called at session construction, before any turn.
    pub(crate) fn validate(&self) -> Result<(), SessionError> {
        if self.critique_rounds > MAX_CRITIQUE_ROUNDS {
            return Err(SessionError::new(SessionErrorKind::MalformedConfiguration(
                format!(
                    "critique rounds must be at most {}, got {}",
                    MAX_CRITIQUE_ROUNDS, self.critique_rounds
                ),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_collab(rounds: u32) -> CollaborationConfig {
        CollaborationConfig::builder()
            .genre("Comedy")
            .theme("test")
            .tone("Dry")
            .rounds(rounds)
            .build()
            .unwrap()
    }

    #[test]
    fn rounds_inside_bounds_validate() {
        for rounds in MIN_ROUNDS..=MAX_ROUNDS {
            assert!(base_collab(rounds).validate().is_ok());
        }
    }

    #[test]
    fn zero_rounds_is_malformed() {
        let err = base_collab(0).validate().unwrap_err();
        assert!(matches!(
            err.kind,
            SessionErrorKind::MalformedConfiguration(_)
        ));
    }

    #[test]
    fn rounds_above_cap_are_malformed() {
        assert!(base_collab(MAX_ROUNDS + 1).validate().is_err());
    }

    #[test]
    fn sketch_bounds() {
        let ok = SketchConfig::builder().theme("t").build().unwrap();
        assert!(ok.validate().is_ok());

        let too_many = SketchConfig::builder()
            .theme("t")
            .critique_rounds(MAX_CRITIQUE_ROUNDS + 1)
            .build()
            .unwrap();
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn missing_required_field_fails_build() {
        let result = CollaborationConfig::builder().genre("Comedy").build();
        assert!(result.is_err());
    }
}
