//! Direct GenAI client for the Gemini API and Vertex AI (API-key mode).

use super::options::GoogleGenAiOptions;
use super::stream::GoogleStreamParser;
use super::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse, GoogleError,
};
use crate::error::{ModelError, ModelResult};
use crate::generator::{ContentGenerator, GenerateContentStream};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default Gemini API endpoint.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default Vertex AI endpoint.
pub const VERTEX_BASE_URL: &str = "https://aiplatform.googleapis.com";
/// Default Gemini API version.
pub const GEMINI_API_VERSION: &str = "v1beta";
/// Default Vertex AI API version.
pub const VERTEX_API_VERSION: &str = "v1beta1";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// GenAI client.
///
/// Built from [`GoogleGenAiOptions`]; every request carries the configured
/// headers (including `User-Agent`) and the API key header.
#[derive(Debug, Clone)]
pub struct GoogleGenAi {
    client: Client,
    options: GoogleGenAiOptions,
    base_url: String,
    api_version: String,
}

impl GoogleGenAi {
    /// Construct a client.
    ///
    /// Fails if no API key is given or a header is not a valid HTTP header.
    pub fn new(options: GoogleGenAiOptions) -> ModelResult<Self> {
        let vertex = options.is_vertex();
        let api_key = options
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                if vertex {
                    ModelError::configuration(
                        "Vertex AI requires an API key; default credentials are not supported",
                    )
                } else {
                    ModelError::configuration("API key must be set when using the Gemini API")
                }
            })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &options.http_options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ModelError::configuration(format!("invalid header name {name:?}: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ModelError::configuration(format!("invalid value for header {name:?}: {e}"))
            })?;
            headers.insert(name, value);
        }
        let mut key_value = HeaderValue::from_str(api_key)
            .map_err(|e| ModelError::configuration(format!("invalid API key: {e}")))?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = options.http_options.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ModelError::configuration(format!("failed to build HTTP client: {e}")))?;

        let base_url = options
            .base_url
            .as_deref()
            .unwrap_or(if vertex { VERTEX_BASE_URL } else { GEMINI_BASE_URL })
            .trim_end_matches('/')
            .to_string();
        let api_version = options
            .http_options
            .api_version
            .clone()
            .unwrap_or_else(|| {
                let version = if vertex {
                    VERTEX_API_VERSION
                } else {
                    GEMINI_API_VERSION
                };
                version.to_string()
            });

        tracing::debug!(
            base_url = %base_url,
            api_version = %api_version,
            vertex,
            "constructed GenAI client"
        );

        Ok(Self {
            client,
            options,
            base_url,
            api_version,
        })
    }

    /// The options this client was built from.
    pub fn options(&self) -> &GoogleGenAiOptions {
        &self.options
    }

    /// Effective endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Effective API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Whether requests go to Vertex AI.
    pub fn is_vertex(&self) -> bool {
        self.options.is_vertex()
    }

    /// Build the URL for a model method, e.g. `generateContent`.
    fn model_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        if self.is_vertex() {
            format!(
                "{}/{}/publishers/google/models/{}:{}",
                self.base_url, self.api_version, model, method
            )
        } else {
            format!(
                "{}/{}/models/{}:{}",
                self.base_url, self.api_version, model, method
            )
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ModelResult<Response> {
        tracing::debug!(url = %url, "sending GenAI request");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let retry_after = retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(handle_error_response(status, &body, retry_after));
        }
        Ok(response)
    }

    fn transport_error(&self, err: reqwest::Error) -> ModelError {
        ModelError::from_transport(err, self.options.http_options.timeout())
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> ModelResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(url, body)
            .await?
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.transport_error(e)
                } else {
                    ModelError::invalid_response(e.to_string())
                }
            })
    }
}

/// `Retry-After` in whole seconds; HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
        .map(Duration::from_secs)
}

/// Map an error response to a [`ModelError`].
fn handle_error_response(status: u16, body: &str, retry_after: Option<Duration>) -> ModelError {
    if status == 429 {
        return ModelError::RateLimited { retry_after };
    }

    if let Ok(err) = serde_json::from_str::<GoogleError>(body) {
        match status {
            401 | 403 => return ModelError::auth(err.error.message),
            404 => return ModelError::NotFound(err.error.message),
            _ => {}
        }

        return ModelError::Api {
            message: err.error.message,
            code: err.error.status,
        };
    }

    match status {
        401 | 403 => ModelError::auth(body),
        _ => ModelError::http(status, body),
    }
}

#[async_trait]
impl ContentGenerator for GoogleGenAi {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentResponse> {
        let url = self.model_url(model, "generateContent");
        self.post_json(&url, request).await
    }

    async fn generate_content_stream(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> ModelResult<GenerateContentStream> {
        let url = format!("{}?alt=sse", self.model_url(model, "streamGenerateContent"));
        let response = self.post(&url, request).await?;
        Ok(Box::pin(
            GoogleStreamParser::new(response.bytes_stream())
                .with_timeout(self.options.http_options.timeout()),
        ))
    }

    async fn count_tokens(
        &self,
        model: &str,
        request: &CountTokensRequest,
    ) -> ModelResult<CountTokensResponse> {
        let url = self.model_url(model, "countTokens");
        self.post_json(&url, request).await
    }

    async fn embed_content(
        &self,
        model: &str,
        request: &EmbedContentRequest,
    ) -> ModelResult<EmbedContentResponse> {
        let url = self.model_url(model, "embedContent");
        self.post_json(&url, request).await
    }
}
