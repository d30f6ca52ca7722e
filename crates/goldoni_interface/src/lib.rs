//! Trait definitions for Goldoni model backends.
//!
//! This crate defines the capability seam between the orchestration core and
//! concrete model clients: the [`GoldoniDriver`] trait for complete
//! responses and the [`Streaming`] trait for incremental delivery.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GoldoniDriver, Streaming};
pub use types::{FinishReason, StreamChunk};
