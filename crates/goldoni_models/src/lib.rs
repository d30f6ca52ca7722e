//! LLM provider clients for Goldoni.
//!
//! Each provider implements [`goldoni_interface::GoldoniDriver`], and
//! providers with incremental delivery also implement
//! [`goldoni_interface::Streaming`]. Sessions are written against those
//! traits, so swapping providers never touches orchestration code.
//!
//! # Example
//!
//! ```no_run
//! use goldoni_models::AnthropicClient;
//! use goldoni_interface::GoldoniDriver;
//! use goldoni_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new("api-key", "claude-sonnet-4-5");
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::new(Role::User, "Write a one-line play.")])
//!     .max_tokens(Some(256))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
