//! Content generator configuration and construction.
//!
//! Picks how to build a Gemini content generator from a
//! [`ContentGeneratorConfig`] and the environment:
//!
//! - **OAuth** (`oauth-personal`, `oauth-enterprise`): delegated to a
//!   [`CodeAssistFactory`]; no direct client is constructed
//! - **API key** (`gemini-api-key`, `vertex-ai`): a direct GenAI client,
//!   optionally pointed at a custom endpoint
//!
//! ## Custom endpoints
//!
//! - `GEMINI_API_ENDPOINT` - primary override
//! - `GOOGLE_GENAI_ENDPOINT` - used when the primary is unset or empty
//!
//! Overrides only apply to API-key auth types.
//!
//! ## Example
//!
//! ```rust,ignore
//! use geminicli_core::AuthType;
//! use geminicli_providers::{create_content_generator, ContentGeneratorConfig};
//!
//! let config = ContentGeneratorConfig::new("gemini-2.5-pro", AuthType::UseGemini)
//!     .with_api_key(std::env::var("GEMINI_API_KEY")?);
//! let generator = create_content_generator(&config).await?;
//! ```

mod config;
mod endpoint;
mod error;
mod factory;

pub use config::{
    validate_auth_method, ContentGeneratorConfig, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY,
    GOOGLE_API_KEY, GOOGLE_CLOUD_LOCATION, GOOGLE_CLOUD_PROJECT,
};
pub use endpoint::{resolve_endpoint_override, GEMINI_API_ENDPOINT, GOOGLE_GENAI_ENDPOINT};
pub use error::{ProviderError, ProviderResult};
pub use factory::{
    CodeAssistFactory, ContentGeneratorFactory, GenAiClientFactory, GoogleGenAiFactory,
};

use geminicli_models::BoxedContentGenerator;

/// Create a content generator using the process environment.
///
/// OAuth auth types fail with [`ProviderError::CodeAssistUnavailable`] here;
/// use [`ContentGeneratorFactory::with_code_assist`] to support them.
pub async fn create_content_generator(
    config: &ContentGeneratorConfig,
) -> ProviderResult<BoxedContentGenerator> {
    ContentGeneratorFactory::from_env()
        .create_content_generator(config)
        .await
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        create_content_generator, validate_auth_method, CodeAssistFactory,
        ContentGeneratorConfig, ContentGeneratorFactory, GenAiClientFactory, ProviderError,
        ProviderResult,
    };
}
