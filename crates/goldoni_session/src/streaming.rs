//! Shared turn-streaming helpers for the two orchestrators.

use crate::events::{EventSink, SessionEvent};
use futures_util::StreamExt;
use goldoni_core::{GenerateRequest, Message, Role, Speaker};
use goldoni_error::{GoldoniError, GoldoniResult, SessionError, SessionErrorKind};
use goldoni_interface::{FinishReason, Streaming};
use tracing::{debug, warn};

/// Result of streaming one model invocation to completion.
pub(crate) struct TurnOutcome {
    /// Accumulated response text.
    pub text: String,
    /// Finish reason reported by the terminal chunk, if any.
    pub finish: Option<FinishReason>,
}

/// Stream one model invocation, forwarding chunks as [`SessionEvent::Chunk`]
/// and accumulating the full text.
pub(crate) async fn stream_turn<D: Streaming + ?Sized>(
    driver: &D,
    request: &GenerateRequest,
    speaker: Speaker,
    events: &EventSink,
) -> GoldoniResult<TurnOutcome> {
    let mut stream = driver.generate_stream(request).await?;
    let mut text = String::new();
    let mut finish = None;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if !chunk.text.is_empty() {
            events.send(SessionEvent::Chunk {
                speaker,
                text: chunk.text.clone(),
            });
            text.push_str(&chunk.text);
        }
        if chunk.is_final {
            finish = chunk.finish_reason;
        }
    }

    debug!(%speaker, chars = text.len(), ?finish, "Turn streamed");
    Ok(TurnOutcome { text, finish })
}

/// Fixed invocation parameters shared across continuation calls.
pub(crate) struct ContinuationParams<'a> {
    pub system: &'a str,
    pub model: Option<&'a str>,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub max_continuations: u32,
}

/// Stream an invocation, issuing bounded follow-up calls while the model
/// stops at the token ceiling.
///
/// Each continuation appends the accumulated partial text as an assistant
/// message and asks the model to resume with `nudge`. The loop runs at most
/// `1 + max_continuations` invocations; if the last one is still truncated,
/// the partial text is returned with a warning event rather than an error.
pub(crate) async fn stream_with_continuation<D: Streaming + ?Sized>(
    driver: &D,
    params: &ContinuationParams<'_>,
    base_history: &[Message],
    instruction: &str,
    nudge: &str,
    speaker: Speaker,
    events: &EventSink,
) -> GoldoniResult<String> {
    let mut accumulated = String::new();

    for attempt in 0..=params.max_continuations {
        let mut messages = base_history.to_vec();
        messages.push(Message::new(Role::User, instruction));
        if !accumulated.is_empty() {
            messages.push(Message::new(Role::Assistant, accumulated.clone()));
            messages.push(Message::new(Role::User, nudge));
        }

        let request = GenerateRequest {
            system: Some(params.system.to_string()),
            messages,
            max_tokens: Some(params.max_tokens),
            temperature: params.temperature,
            model: params.model.map(str::to_string),
        };

        let outcome = stream_turn(driver, &request, speaker, events).await?;
        accumulated.push_str(&outcome.text);

        if outcome.finish != Some(FinishReason::Length) {
            return Ok(accumulated);
        }

        if attempt < params.max_continuations {
            warn!(%speaker, attempt = attempt + 1, "Response truncated, continuing");
            events.send(SessionEvent::Warning {
                message: format!(
                    "{} response hit the token ceiling, requesting continuation {} of {}",
                    speaker,
                    attempt + 1,
                    params.max_continuations
                ),
            });
        }
    }

    events.send(SessionEvent::Warning {
        message: format!(
            "{} response still truncated after {} continuations",
            speaker, params.max_continuations
        ),
    });
    Ok(accumulated)
}

/// Wrap a driver failure in the session error taxonomy, tagging the agent
/// and round where generation stopped.
#[track_caller]
pub(crate) fn invocation_error(speaker: Speaker, round: u32, err: GoldoniError) -> GoldoniError {
    SessionError::new(SessionErrorKind::AgentInvocation {
        speaker,
        round,
        message: err.to_string(),
    })
    .into()
}
