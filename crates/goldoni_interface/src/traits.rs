//! Trait definitions for model backends and their capabilities.

use crate::StreamChunk;
use async_trait::async_trait;
use futures_util::stream::Stream;
use goldoni_core::{GenerateRequest, GenerateResponse};
use goldoni_error::GoldoniResult;
use std::pin::Pin;
use std::sync::Arc;

/// Core trait that all model backends must implement.
///
/// This provides the minimal interface for complete text generation.
/// Incremental delivery is exposed through the [`Streaming`] trait.
#[async_trait]
pub trait GoldoniDriver: Send + Sync {
    /// Generate a complete model response for the given request.
    async fn generate(&self, req: &GenerateRequest) -> GoldoniResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier for this client.
    fn model_name(&self) -> &str;
}

/// Trait for backends that support streaming responses.
///
/// The returned stream is finite and not restartable: it yields text chunks
/// as they arrive and terminates after a final chunk carrying the finish
/// reason. Provider failures surface as stream items, never as silent
/// truncation.
#[async_trait]
pub trait Streaming: GoldoniDriver {
    /// Generate a streaming response.
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> GoldoniResult<Pin<Box<dyn Stream<Item = GoldoniResult<StreamChunk>> + Send>>>;
}

// Shared clients stay usable behind Arc.
#[async_trait]
impl<T: GoldoniDriver + ?Sized> GoldoniDriver for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> GoldoniResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: Streaming + ?Sized> Streaming for Arc<T> {
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> GoldoniResult<Pin<Box<dyn Stream<Item = GoldoniResult<StreamChunk>> + Send>>> {
        (**self).generate_stream(req).await
    }
}
