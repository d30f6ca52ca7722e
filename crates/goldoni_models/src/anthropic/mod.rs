//! Anthropic Messages API client.

mod client;
mod types;

pub use client::AnthropicClient;
pub use types::{
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
