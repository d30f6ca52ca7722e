//! Scripted driver for deterministic session tests.

use async_trait::async_trait;
use futures_util::stream::Stream;
use goldoni_core::{GenerateRequest, GenerateResponse};
use goldoni_error::{GoldoniResult, HttpError};
use goldoni_interface::{FinishReason, GoldoniDriver, StreamChunk, Streaming};
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Mutex;

/// One scripted model response.
pub enum Scripted {
    /// Succeed, yielding the chunks then a terminal chunk.
    Reply {
        chunks: Vec<String>,
        finish: FinishReason,
    },
    /// Fail the invocation outright.
    Fail(String),
}

impl Scripted {
    /// A single-chunk reply that stops naturally.
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply {
            chunks: vec![text.into()],
            finish: FinishReason::Stop,
        }
    }

    /// A reply cut short at the token ceiling.
    pub fn truncated(text: impl Into<String>) -> Self {
        Self::Reply {
            chunks: vec![text.into()],
            finish: FinishReason::Length,
        }
    }
}

/// Driver that replays a fixed queue of responses and records every request.
pub struct ScriptedDriver {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    pub fn new(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request the driver has received, in order.
    pub fn recorded_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, req: &GenerateRequest) -> GoldoniResult<Scripted> {
        self.requests.lock().unwrap().push(req.clone());
        let scripted = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted driver ran out of responses");
        match scripted {
            Scripted::Fail(message) => Err(HttpError::new(message).into()),
            reply => Ok(reply),
        }
    }
}

#[async_trait]
impl GoldoniDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> GoldoniResult<GenerateResponse> {
        match self.next(req)? {
            Scripted::Reply { chunks, .. } => Ok(GenerateResponse {
                text: chunks.concat(),
            }),
            Scripted::Fail(_) => unreachable!("next() returns Fail as Err"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

#[async_trait]
impl Streaming for ScriptedDriver {
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> GoldoniResult<Pin<Box<dyn Stream<Item = GoldoniResult<StreamChunk>> + Send>>> {
        match self.next(req)? {
            Scripted::Reply { chunks, finish } => {
                let items: Vec<GoldoniResult<StreamChunk>> = chunks
                    .into_iter()
                    .map(|text| Ok(StreamChunk::text(text)))
                    .chain(std::iter::once(Ok(StreamChunk::finished(finish))))
                    .collect();
                Ok(Box::pin(futures_util::stream::iter(items)))
            }
            Scripted::Fail(_) => unreachable!("next() returns Fail as Err"),
        }
    }
}
