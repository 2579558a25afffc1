//! Mock content generator for testing.
//!
//! [`MockContentGenerator`] returns queued responses in order and records
//! every call it receives.
//!
//! ```rust
//! use geminicli_models::MockContentGenerator;
//!
//! let generator = MockContentGenerator::new()
//!     .with_text_response("First response")
//!     .with_text_response("Second response");
//! assert!(generator.recorded_calls().is_empty());
//! ```

use crate::error::{ModelError, ModelResult};
use crate::generator::{ContentGenerator, GenerateContentStream};
use crate::google::types::{
    ContentEmbedding, CountTokensRequest, CountTokensResponse, EmbedContentRequest,
    EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// A call recorded by [`MockContentGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `generate_content` or `generate_content_stream`.
    Generate {
        /// Model name.
        model: String,
        /// Request body.
        request: GenerateContentRequest,
        /// Whether the streaming method was used.
        stream: bool,
    },
    /// `count_tokens`.
    CountTokens {
        /// Model name.
        model: String,
        /// Request body.
        request: CountTokensRequest,
    },
    /// `embed_content`.
    Embed {
        /// Model name.
        model: String,
        /// Request body.
        request: EmbedContentRequest,
    },
}

/// A content generator with pre-configured responses.
#[derive(Debug, Clone, Default)]
pub struct MockContentGenerator {
    responses: Arc<Mutex<VecDeque<GenerateContentResponse>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    embedding: Vec<f32>,
}

impl MockContentGenerator {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    #[must_use]
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a single-candidate text response.
    #[must_use]
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.with_response(GenerateContentResponse::from_text(text))
    }

    /// Set the vector returned by `embed_content`.
    #[must_use]
    pub fn with_embedding(mut self, values: Vec<f32>) -> Self {
        self.embedding = values;
        self
    }

    /// All calls received so far.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn next_response(&self) -> ModelResult<GenerateContentResponse> {
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| ModelError::invalid_response("no mock responses queued"))
    }
}

/// Whitespace-separated word count, a rough stand-in for tokens.
fn approximate_tokens(request: &CountTokensRequest) -> u64 {
    request
        .contents
        .iter()
        .map(|content| content.joined_text().split_whitespace().count() as u64)
        .sum()
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentResponse> {
        self.calls.lock().push(RecordedCall::Generate {
            model: model.to_string(),
            request: request.clone(),
            stream: false,
        });
        self.next_response()
    }

    async fn generate_content_stream(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentStream> {
        self.calls.lock().push(RecordedCall::Generate {
            model: model.to_string(),
            request: request.clone(),
            stream: true,
        });
        let chunks: Vec<ModelResult<GenerateContentResponse>> =
            self.responses.lock().drain(..).map(Ok).collect();
        Ok(Box::pin(futures::stream::iter(chunks)))
    }

    async fn count_tokens(
        &self,
        model: &str,
        request: &CountTokensRequest,
    ) -> ModelResult<CountTokensResponse> {
        self.calls.lock().push(RecordedCall::CountTokens {
            model: model.to_string(),
            request: request.clone(),
        });
        Ok(CountTokensResponse {
            total_tokens: approximate_tokens(request),
            cached_content_token_count: None,
        })
    }

    async fn embed_content(
        &self,
        model: &str,
        request: &EmbedContentRequest,
    ) -> ModelResult<EmbedContentResponse> {
        self.calls.lock().push(RecordedCall::Embed {
            model: model.to_string(),
            request: request.clone(),
        });
        Ok(EmbedContentResponse {
            embedding: ContentEmbedding {
                values: self.embedding.clone(),
            },
        })
    }
}
