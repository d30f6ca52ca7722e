//! Bounded multi-agent playwriting sessions.
//!
//! This crate provides the two orchestrators at the heart of Goldoni:
//!
//! - [`CollaborationSession`]: a Writer and a Director alternate for a fixed
//!   number of rounds, each keeping a private conversation history; the
//!   Director's final-round response is the finished play script.
//! - [`SketchSession`]: a Playwright drafts a one-act sketch, then a Critic
//!   and the Playwright run a fixed number of critique/revision iterations;
//!   the last revision is the finished script.
//!
//! Both are bounded: the loop body executes exactly as many times as the
//! configured cap, with no retries, no early exit, and no convergence
//! checks. Progress surfaces through an explicit finite event channel
//! ([`EventSink`]) so callers observe partial output without blocking on
//! session completion.
//!
//! # Example
//!
//! ```rust,ignore
//! use goldoni_session::{CollaborationConfig, CollaborationSession, EventSink, SessionEvent};
//! use goldoni_models::AnthropicClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CollaborationConfig::builder()
//!     .genre("Comedy")
//!     .theme("an AI takes over a small bakery")
//!     .tone("Satirical")
//!     .rounds(3u32)
//!     .build()?;
//!
//! let driver = AnthropicClient::new("api-key", "model-id");
//! let mut session = CollaborationSession::new(driver, config)?;
//!
//! let (sink, mut events) = EventSink::channel();
//! let script = session.run(&sink).await?;
//! println!("{} turns recorded", session.transcript().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collaboration;
mod config;
mod events;
mod monologue;
mod sketch;
mod streaming;

pub use collaboration::CollaborationSession;
pub use config::{
    CollaborationConfig, CollaborationConfigBuilder, MAX_CRITIQUE_ROUNDS, MAX_ROUNDS, MIN_ROUNDS,
    SketchConfig, SketchConfigBuilder,
};
pub use events::{EventSink, SessionEvent};
pub use monologue::rewrite_as_monologue;
pub use sketch::SketchSession;
