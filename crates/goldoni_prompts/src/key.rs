//! Typed prompt keys.

use goldoni_error::{PromptError, PromptErrorKind};
use std::str::FromStr;

/// Symbolic key naming one prompt template.
///
/// The set is closed and enumerable; string-keyed lookups (CLI, config)
/// go through [`PromptKey::parse`], which surfaces `UnknownKey` for
/// anything outside the set.
///
/// # Examples
///
/// ```
/// use goldoni_prompts::PromptKey;
///
/// assert_eq!(format!("{}", PromptKey::WriterOpening), "writer_opening");
/// assert!(PromptKey::parse("director_system").is_ok());
/// assert!(PromptKey::parse("no_such_prompt").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PromptKey {
    /// Story Writer agent persona
    WriterSystem,
    /// Theatre Director agent persona
    DirectorSystem,
    /// Round-1 pitch that opens a collaboration
    WriterOpening,
    /// Per-round writer instruction carrying the director's feedback forward
    WriterRevision,
    /// Per-round director critique request quoting the writer's draft
    DirectorCritique,
    /// Final-round director instruction producing the complete script
    DirectorFinal,
    /// Resume-where-you-stopped nudge used by auto-continuation
    ContinuationNudge,
    /// One-act sketch playwright persona
    SketchSystem,
    /// Sketch generation instruction
    SketchGenerate,
    /// Sketch critic persona
    CriticSystem,
    /// Critique request quoting the current sketch draft
    CriticRequest,
    /// Sketch revision instruction carrying critique notes and draft
    SketchRevise,
    /// Monologue performer persona
    MonologueSystem,
    /// Script-to-monologue rewrite instruction
    MonologueRewrite,
}

impl PromptKey {
    /// Parse a key from its snake_case name.
    ///
    /// # Errors
    ///
    /// Returns `PromptErrorKind::UnknownKey` if the name matches no key.
    pub fn parse(name: &str) -> Result<Self, PromptError> {
        Self::from_str(name)
            .map_err(|_| PromptError::new(PromptErrorKind::UnknownKey(name.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_key_round_trips_through_its_name() {
        for key in PromptKey::iter() {
            let name = key.to_string();
            assert_eq!(PromptKey::parse(&name).unwrap(), key);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = PromptKey::parse("funny_play_generate_v2").unwrap_err();
        assert!(matches!(err.kind, PromptErrorKind::UnknownKey(_)));
    }
}
