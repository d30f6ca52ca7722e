//! Goldoni: multi-agent LLM playwriting with bounded collaboration loops.
//!
//! Goldoni turns a theme into a finished play script by orchestrating
//! role-specialised LLM agents:
//!
//! - **Collaboration**: a Story Writer and a Theatre Director alternate for
//!   a fixed number of rounds; the Director's final response is the script.
//! - **Sketch**: a comedy Playwright drafts a two-minute micro-play, then a
//!   Critic and the Playwright iterate a fixed number of times.
//! - **Monologue**: a finished sketch is rewritten as a single spoken-word
//!   performance.
//!
//! Every loop is bounded up front, with no retries and no convergence
//! checks, so cost and latency are predictable. This facade crate
//! re-exports the public API of the workspace and ships the `goldoni`
//! binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;

pub use cli::{Cli, Commands};
pub use goldoni_core::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, MessageBuilder, Role,
    Speaker, Turn,
};
pub use goldoni_error::{
    AnthropicError, AnthropicErrorKind, ConfigError, GoldoniError, GoldoniErrorKind, GoldoniResult,
    HttpError, PromptError, PromptErrorKind, SessionError, SessionErrorKind,
};
pub use goldoni_interface::{FinishReason, GoldoniDriver, StreamChunk, Streaming};
pub use goldoni_models::AnthropicClient;
pub use goldoni_prompts::{PromptKey, PromptRegistry, Substitutions};
pub use goldoni_session::{
    CollaborationConfig, CollaborationConfigBuilder, CollaborationSession, EventSink,
    MAX_CRITIQUE_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, SessionEvent, SketchConfig, SketchConfigBuilder,
    SketchSession, rewrite_as_monologue,
};
