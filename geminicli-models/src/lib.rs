//! # geminicli-models
//!
//! The [`ContentGenerator`] trait and the Gemini / Vertex AI client behind it.
//!
//! - [`ContentGenerator`]: generate (plain and streaming), count tokens, embed
//! - [`google::GoogleGenAi`]: HTTP client authenticated with an API key
//! - [`google::GoogleGenAiOptions`]: constructor arguments, including the
//!   optional custom endpoint and HTTP headers
//! - [`MockContentGenerator`]: queued responses for tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use geminicli_models::{ContentGenerator, GenerateContentRequest};
//! use geminicli_models::google::{GoogleGenAi, GoogleGenAiOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GoogleGenAi::new(
//!         GoogleGenAiOptions::new().with_api_key(std::env::var("GEMINI_API_KEY")?),
//!     )?;
//!
//!     let response = client
//!         .generate_content("gemini-2.5-flash", &GenerateContentRequest::prompt("Hello!"))
//!         .await?;
//!     println!("{:?}", response.text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generator;
pub mod google;
pub mod mock;

pub use error::{ModelError, ModelResult};
pub use generator::{BoxedContentGenerator, ContentGenerator, GenerateContentStream};
pub use google::{
    Content, CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse, GoogleGenAi, GoogleGenAiOptions, HttpOptions,
    Part,
};
pub use mock::{MockContentGenerator, RecordedCall};
