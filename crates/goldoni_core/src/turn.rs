//! Recorded turns in a session transcript.

use crate::Speaker;
use serde::{Deserialize, Serialize};

/// One recorded model response, tagged with its authoring agent and round.
///
/// Turns are created once per completed response and never mutated. The
/// round index is 1-based and monotonically non-decreasing across a
/// session's transcript.
///
/// # Examples
///
/// ```
/// use goldoni_core::{Speaker, Turn};
///
/// let turn = Turn::new(Speaker::Writer, 1, "ACT I, SCENE 1", false);
/// assert_eq!(turn.speaker, Speaker::Writer);
/// assert_eq!(turn.round, 1);
/// assert!(!turn.is_final);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The agent that authored this turn
    pub speaker: Speaker,
    /// 1-based round index
    pub round: u32,
    /// The full text of the response
    pub content: String,
    /// Whether this turn's content is the session's final artifact
    pub is_final: bool,
}

impl Turn {
    /// Record a completed response.
    pub fn new(speaker: Speaker, round: u32, content: impl Into<String>, is_final: bool) -> Self {
        Self {
            speaker,
            round,
            content: content.into(),
            is_final,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_round_trips_through_serde() {
        let turn = Turn::new(Speaker::Critic, 2, "• tighten the punchline", false);
        let json = serde_json::to_string(&turn).unwrap();
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(turn, back);
    }
}
