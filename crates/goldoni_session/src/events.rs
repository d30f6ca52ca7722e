//! Progress events and the event channel.

use goldoni_core::{Speaker, Turn};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A progress event pushed by an orchestrator while a session runs.
///
/// Within a session, events form an ordered, finite, non-restartable
/// sequence ending with [`SessionEvent::Completed`] (or with the channel
/// closing unfinished if the session failed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A round (or critique iteration) is starting.
    RoundStarted {
        /// 1-based round index
        round: u32,
        /// Configured round cap
        total: u32,
    },
    /// Incremental text from an in-progress model invocation.
    Chunk {
        /// The agent currently speaking
        speaker: Speaker,
        /// The incremental text
        text: String,
    },
    /// A model response completed and was recorded in the transcript.
    TurnCompleted(Turn),
    /// Something non-fatal worth telling the user (e.g. truncation).
    Warning {
        /// Human-readable description
        message: String,
    },
    /// Terminal event: the session produced its final artifact.
    Completed {
        /// The final script text
        script: String,
    },
}

/// Sending half of a session's event channel.
///
/// Sends are fire-and-forget: if the receiver has been dropped the caller
/// has abandoned the session, and events are silently discarded. The round
/// cap already bounds total compute, so the session simply runs out.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl EventSink {
    /// Create a sink and its receiving half.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Create a sink whose events go nowhere.
    pub fn discard() -> Self {
        let (sink, _rx) = Self::channel();
        sink
    }

    /// Push an event; ignores a closed channel.
    pub fn send(&self, event: SessionEvent) {
        let _ = self.tx.send(event);
    }
}
