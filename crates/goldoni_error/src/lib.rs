//! Error types for the Goldoni playwriting orchestrator.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use goldoni_error::{GoldoniResult, HttpError};
//!
//! fn fetch_data() -> GoldoniResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod config;
mod error;
mod http;
mod prompt;
mod session;

pub use anthropic::{AnthropicError, AnthropicErrorKind};
pub use config::ConfigError;
pub use error::{GoldoniError, GoldoniErrorKind, GoldoniResult};
pub use http::HttpError;
pub use prompt::{PromptError, PromptErrorKind};
pub use session::{SessionError, SessionErrorKind};
