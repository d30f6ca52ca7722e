//! Core data types for the Goldoni playwriting orchestrator.
//!
//! This crate provides the foundation data types used across all Goldoni
//! crates: conversation roles, agent identities, messages, generation
//! requests, and recorded turns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod speaker;
mod turn;

pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use speaker::Speaker;
pub use turn::Turn;
