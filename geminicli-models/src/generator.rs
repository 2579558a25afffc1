//! The content generator trait.
//!
//! A content generator is the client handle returned by the factory: either a
//! direct GenAI client or an OAuth-backed code-assist client.

use crate::error::ModelResult;
use crate::google::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Stream of response chunks from `generate_content_stream`.
pub type GenerateContentStream =
    Pin<Box<dyn Stream<Item = ModelResult<GenerateContentResponse>> + Send>>;

/// Generates content, counts tokens and embeds text for a model.
#[async_trait]
pub trait ContentGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a complete response.
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentResponse>;

    /// Generate a response as a stream of chunks.
    async fn generate_content_stream(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentStream>;

    /// Count tokens for the given contents.
    async fn count_tokens(
        &self,
        model: &str,
        request: &CountTokensRequest,
    ) -> ModelResult<CountTokensResponse>;

    /// Embed content.
    async fn embed_content(
        &self,
        model: &str,
        request: &EmbedContentRequest,
    ) -> ModelResult<EmbedContentResponse>;
}

/// Type alias for shared content generators.
pub type BoxedContentGenerator = Arc<dyn ContentGenerator>;
