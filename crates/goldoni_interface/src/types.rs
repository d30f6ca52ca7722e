//! Core type definitions for the Goldoni driver interface.

use serde::{Deserialize, Serialize};

/// A single chunk from a streaming response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text content (may be empty on the final chunk).
    pub text: String,
    /// Whether this is the final chunk.
    pub is_final: bool,
    /// Optional finish reason if final.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// An intermediate text chunk.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
            finish_reason: None,
        }
    }

    /// A terminal chunk carrying the finish reason.
    pub fn finished(reason: FinishReason) -> Self {
        Self {
            text: String::new(),
            is_final: true,
            finish_reason: Some(reason),
        }
    }
}

/// Why generation stopped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit the max_tokens limit; the response is truncated.
    Length,
    /// Hit a stop sequence.
    StopSequence,
    /// Content was filtered.
    ContentFilter,
    /// Other/unknown reason.
    Other,
}
