use crate::anthropic::types::{
    AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse, ContentDelta,
    StreamEvent, map_stop_reason,
};
use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use futures_util::stream::Stream;
use goldoni_core::{GenerateRequest, GenerateResponse, Role};
use goldoni_error::{AnthropicError, AnthropicErrorKind, GoldoniResult};
use goldoni_interface::{GoldoniDriver, StreamChunk, Streaming};
use reqwest::Client;
use std::pin::Pin;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4_096;

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Default model identifier (e.g., "claude-sonnet-4-5")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!(%model, "Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends a request to the Anthropic API and parses the full response.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, AnthropicError> {
        debug!("Sending request to Anthropic API");
        let response = self.post(request).await?;

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            AnthropicError::new(AnthropicErrorKind::Parse(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    async fn post(&self, request: &AnthropicRequest) -> Result<reqwest::Response, AnthropicError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                AnthropicError::new(AnthropicErrorKind::Http(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(AnthropicError::new(AnthropicErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        Ok(response)
    }

    /// Converts a Goldoni GenerateRequest to an Anthropic API request.
    fn convert_request(
        &self,
        request: &GenerateRequest,
        stream: bool,
    ) -> Result<AnthropicRequest, AnthropicError> {
        let messages: Result<Vec<AnthropicMessage>, AnthropicError> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::System => {
                        return Err(AnthropicError::new(AnthropicErrorKind::Conversion(
                            "System role not supported in messages (use system parameter)"
                                .to_string(),
                        )));
                    }
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(vec![AnthropicContentBlock::Text {
                        text: msg.content.clone(),
                    }])
                    .build()
                    .map_err(|e| AnthropicError::new(AnthropicErrorKind::Builder(e.to_string())))
            })
            .collect();

        let mut builder = AnthropicRequest::builder()
            .model(request.model.as_deref().unwrap_or(&self.model))
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .messages(messages?);

        if let Some(system) = &request.system {
            builder = builder.system(Some(system.clone()));
        }
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(Some(temperature));
        }
        if stream {
            builder = builder.stream(Some(true));
        }

        builder
            .build()
            .map_err(|e| AnthropicError::new(AnthropicErrorKind::Builder(e.to_string())))
    }
}

/// Interpret one server-sent event's data payload as a stream chunk.
///
/// Returns `None` for events that carry nothing the session needs
/// (message_start, ping, content_block_stop, ...).
pub(crate) fn parse_stream_event(data: &str) -> Option<GoldoniResult<StreamChunk>> {
    match serde_json::from_str::<StreamEvent>(data) {
        Ok(StreamEvent::ContentBlockDelta {
            delta: ContentDelta::TextDelta { text },
        }) => Some(Ok(StreamChunk::text(text))),
        Ok(StreamEvent::ContentBlockDelta { .. }) => None,
        Ok(StreamEvent::MessageDelta { delta }) => delta
            .stop_reason
            .map(|reason| Ok(StreamChunk::finished(map_stop_reason(&reason)))),
        Ok(StreamEvent::Error { error }) => Some(Err(AnthropicError::new(
            AnthropicErrorKind::Stream(format!("{}: {}", error.kind, error.message)),
        )
        .into())),
        Ok(StreamEvent::Ignored) => None,
        Err(e) => Some(Err(AnthropicError::new(AnthropicErrorKind::Parse(
            format!("Malformed stream event: {e}"),
        ))
        .into())),
    }
}

#[async_trait]
impl GoldoniDriver for AnthropicClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> GoldoniResult<GenerateResponse> {
        let request = self.convert_request(req, false)?;
        let response = self.generate_anthropic(&request).await?;
        Ok(GenerateResponse {
            text: response.text(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Streaming for AnthropicClient {
    #[instrument(skip(self, req))]
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> GoldoniResult<Pin<Box<dyn Stream<Item = GoldoniResult<StreamChunk>> + Send>>> {
        let request = self.convert_request(req, true)?;
        let response = self.post(&request).await?;

        let chunks = response
            .bytes_stream()
            .map(|result| result.map_err(std::io::Error::other))
            .eventsource()
            .filter_map(|event| async move {
                match event {
                    Ok(event) => parse_stream_event(&event.data),
                    Err(e) => Some(Err(AnthropicError::new(AnthropicErrorKind::Stream(
                        format!("Stream transport failed: {e}"),
                    ))
                    .into())),
                }
            });

        Ok(Box::pin(chunks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldoni_core::Message;
    use goldoni_interface::FinishReason;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", "claude-sonnet-4-5")
    }

    #[test]
    fn convert_maps_roles_and_defaults() {
        let request = GenerateRequest {
            system: Some("You are a playwright.".to_string()),
            messages: vec![
                Message::new(Role::User, "Write a scene."),
                Message::new(Role::Assistant, "ACT I."),
            ],
            max_tokens: None,
            temperature: Some(0.7),
            model: None,
        };

        let wire = client().convert_request(&request, false).unwrap();
        assert_eq!(wire.model, "claude-sonnet-4-5");
        assert_eq!(wire.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(wire.system.as_deref(), Some("You are a playwright."));
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.messages[1].role, "assistant");
        assert_eq!(wire.stream, None);
    }

    #[test]
    fn request_model_overrides_client_default() {
        let request = GenerateRequest {
            model: Some("claude-haiku-4".to_string()),
            messages: vec![Message::new(Role::User, "hi")],
            ..GenerateRequest::default()
        };
        let wire = client().convert_request(&request, true).unwrap();
        assert_eq!(wire.model, "claude-haiku-4");
        assert_eq!(wire.stream, Some(true));
    }

    #[test]
    fn system_role_in_messages_is_rejected() {
        let request = GenerateRequest {
            messages: vec![Message::new(Role::System, "be brief")],
            ..GenerateRequest::default()
        };
        let err = client().convert_request(&request, false).unwrap_err();
        assert!(matches!(err.kind, AnthropicErrorKind::Conversion(_)));
    }

    #[test]
    fn text_delta_becomes_a_chunk() {
        let chunk = parse_stream_event(
            r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"CURTAIN"}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(chunk.text, "CURTAIN");
        assert!(!chunk.is_final);
    }

    #[test]
    fn message_delta_carries_the_finish_reason() {
        let chunk = parse_stream_event(
            r#"{"type":"message_delta","delta":{"stop_reason":"max_tokens","stop_sequence":null},"usage":{"output_tokens":64000}}"#,
        )
        .unwrap()
        .unwrap();
        assert!(chunk.is_final);
        assert_eq!(chunk.finish_reason, Some(FinishReason::Length));
    }

    #[test]
    fn housekeeping_events_yield_nothing() {
        assert!(parse_stream_event(r#"{"type":"ping"}"#).is_none());
        assert!(
            parse_stream_event(
                r#"{"type":"message_start","message":{"id":"msg_01","content":[]}}"#
            )
            .is_none()
        );
        assert!(parse_stream_event(r#"{"type":"content_block_stop","index":0}"#).is_none());
    }

    #[test]
    fn error_events_surface_as_stream_errors() {
        let err = parse_stream_event(
            r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
        )
        .unwrap()
        .unwrap_err();
        assert!(format!("{err}").contains("Overloaded"));
    }
}
