//! Gemini API / Vertex AI client.
//!
//! - [`GoogleGenAi`]: the direct client, authenticated with an API key
//! - [`GoogleGenAiOptions`]: its constructor arguments
//! - [`types`]: request/response bodies
//!
//! ## Example
//!
//! ```rust,ignore
//! use geminicli_models::google::{GoogleGenAi, GoogleGenAiOptions, HttpOptions};
//! use geminicli_models::{ContentGenerator, GenerateContentRequest};
//!
//! let client = GoogleGenAi::new(
//!     GoogleGenAiOptions::new()
//!         .with_api_key(std::env::var("GEMINI_API_KEY")?)
//!         .with_http_options(HttpOptions::with_user_agent("GeminiCLI/0.1.0")),
//! )?;
//!
//! let response = client
//!     .generate_content("gemini-2.5-flash", &GenerateContentRequest::prompt("Hello"))
//!     .await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```

pub mod client;
pub mod options;
pub mod stream;
pub mod types;

pub use client::GoogleGenAi;
pub use options::{GoogleGenAiOptions, HttpOptions, USER_AGENT_HEADER};
pub use stream::GoogleStreamParser;
pub use types::{
    Candidate, Content, ContentEmbedding, CountTokensRequest, CountTokensResponse,
    EmbedContentRequest, EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, SafetySetting, ThinkingConfig, UsageMetadata,
};

/// Common Gemini model names.
pub mod models {
    /// Gemini 2.5 Pro.
    pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";
    /// Gemini 2.5 Flash.
    pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
    /// Gemini text embedding model.
    pub const GEMINI_EMBEDDING_001: &str = "gemini-embedding-001";
}
