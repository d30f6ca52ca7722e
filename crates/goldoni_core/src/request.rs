//! Request and response types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// The system prompt travels out-of-band from the message list because the
/// Anthropic Messages API takes it as a separate parameter.
///
/// # Examples
///
/// ```
/// use goldoni_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .system(Some("You are a playwright.".to_string()))
///     .messages(vec![Message::new(Role::User, "Write a scene.")])
///     .max_tokens(Some(1024))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(1024));
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerateRequest {
    /// Optional system prompt, carried separately from the messages
    pub system: Option<String>,
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Create a builder for a generation request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use goldoni_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "CURTAIN.".to_string(),
/// };
/// assert_eq!(response.text, "CURTAIN.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}
