//! Wire types for the Anthropic Messages API.

use goldoni_interface::FinishReason;
use serde::{Deserialize, Serialize};

/// A single content block in a message or response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Plain text content.
    Text {
        /// The text payload
        text: String,
    },
}

/// One message in the conversation sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    pub role: String,
    /// Ordered content blocks
    pub content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Create a builder for an Anthropic message.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    pub model: String,
    /// Token ceiling for the response
    pub max_tokens: u32,
    /// Conversation messages
    pub messages: Vec<AnthropicMessage>,
    /// System prompt, carried out-of-band from the messages
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub system: Option<String>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Request server-sent-event streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub stream: Option<bool>,
}

impl AnthropicRequest {
    /// Create a builder for an Anthropic request.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicUsage {
    /// Tokens in the request
    pub input_tokens: u32,
    /// Tokens in the response
    pub output_tokens: u32,
}

/// Response body for a non-streaming `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Generated content blocks
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped
    stop_reason: Option<String>,
    /// Token accounting
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Concatenate the text of every content block.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                AnthropicContentBlock::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// One server-sent event in a streaming response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum StreamEvent {
    ContentBlockDelta {
        delta: ContentDelta,
    },
    MessageDelta {
        delta: MessageDeltaBody,
    },
    Error {
        error: ApiErrorBody,
    },
    /// Event types we don't act on (message_start, ping, ...).
    #[serde(other)]
    Ignored,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentDelta {
    TextDelta { text: String },
    #[serde(other)]
    Ignored,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageDeltaBody {
    pub(crate) stop_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) message: String,
}

/// Map the API's stop_reason string to a typed finish reason.
pub(crate) fn map_stop_reason(reason: &str) -> FinishReason {
    match reason {
        "end_turn" => FinishReason::Stop,
        "max_tokens" => FinishReason::Length,
        "stop_sequence" => FinishReason::StopSequence,
        _ => FinishReason::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_without_absent_options() {
        let request = AnthropicRequest::builder()
            .model("claude-sonnet-4-5")
            .max_tokens(256u32)
            .messages(vec![
                AnthropicMessage::builder()
                    .role("user")
                    .content(vec![AnthropicContentBlock::Text {
                        text: "hello".to_string(),
                    }])
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-5");
        assert!(json.get("system").is_none());
        assert!(json.get("stream").is_none());
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
    }

    #[test]
    fn request_builder_sets_options_across_statements() {
        let mut builder = AnthropicRequest::builder()
            .model("claude-sonnet-4-5")
            .max_tokens(256u32)
            .messages(Vec::new());
        builder = builder.system(Some("You are a playwright.".to_string()));
        builder = builder.stream(Some(true));

        let request = builder.build().unwrap();
        assert_eq!(request.system.as_deref(), Some("You are a playwright."));
        assert_eq!(request.stream, Some(true));
    }

    #[test]
    fn response_text_joins_blocks() {
        let body = r#"{
            "id": "msg_01",
            "content": [
                {"type": "text", "text": "ACT I. "},
                {"type": "text", "text": "CURTAIN."}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 7}
        }"#;
        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "ACT I. CURTAIN.");
        assert_eq!(response.stop_reason().as_deref(), Some("end_turn"));
    }

    #[test]
    fn stop_reasons_map_to_finish_reasons() {
        assert_eq!(map_stop_reason("end_turn"), FinishReason::Stop);
        assert_eq!(map_stop_reason("max_tokens"), FinishReason::Length);
        assert_eq!(map_stop_reason("stop_sequence"), FinishReason::StopSequence);
        assert_eq!(map_stop_reason("tool_use"), FinishReason::Other);
    }

    #[test]
    fn unknown_stream_events_are_ignored() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert!(matches!(event, StreamEvent::Ignored));
    }
}
