//! # geminicli - Gemini content generator resolution
//!
//! Decides how the Gemini CLI talks to the model backend. A
//! [`ContentGeneratorConfig`] names the model and the auth type; the
//! [`ContentGeneratorFactory`] turns it into a [`ContentGenerator`]:
//!
//! - OAuth logins go through a code assist backend
//! - API keys (Gemini or Vertex AI) get a direct [`GoogleGenAi`] client,
//!   pointed at `GEMINI_API_ENDPOINT` or `GOOGLE_GENAI_ENDPOINT` when set
//!
//! ## Quick Start
//!
//! ```ignore
//! use geminicli::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     geminicli::init_tracing();
//!
//!     let env = ProcessEnv;
//!     validate_auth_method(AuthType::UseGemini, &env)?;
//!     let config = ContentGeneratorConfig::from_env("", AuthType::UseGemini, &env);
//!
//!     let generator = create_content_generator(&config).await?;
//!     let response = generator
//!         .generate_content(&config.model, &GenerateContentRequest::prompt("Hello!"))
//!         .await?;
//!     println!("{}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`geminicli_core`] - auth types, environment lookup, user agent
//! - [`geminicli_models`] - the generator trait and the HTTP client
//! - [`geminicli_providers`] - configuration and the factory

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use tracing_subscriber::EnvFilter;

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Auth types, environment lookup and version helpers.
pub use geminicli_core as core;

/// Content generator trait and client implementations.
pub use geminicli_models as models;

/// Configuration and factory.
pub use geminicli_providers as providers;

// ============================================================================
// Type Re-exports (Flat)
// ============================================================================

// Core
pub use geminicli_core::{
    cli_version, user_agent, AuthType, EnvProvider, MapEnv, ParseAuthTypeError, ProcessEnv,
    SharedEnv,
};

// Models
pub use geminicli_models::{
    BoxedContentGenerator, Content, ContentGenerator, CountTokensRequest, CountTokensResponse,
    EmbedContentRequest, EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
    GenerateContentStream, GoogleGenAi, GoogleGenAiOptions, HttpOptions, MockContentGenerator,
    ModelError, ModelResult, Part,
};

// Providers
pub use geminicli_providers::{
    create_content_generator, resolve_endpoint_override, validate_auth_method,
    CodeAssistFactory, ContentGeneratorConfig, ContentGeneratorFactory, GenAiClientFactory,
    GoogleGenAiFactory, ProviderError, ProviderResult, GEMINI_API_ENDPOINT,
    GOOGLE_GENAI_ENDPOINT,
};

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient prelude for common imports.
///
/// ```ignore
/// use geminicli::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{AuthType, EnvProvider, MapEnv, ProcessEnv};
    pub use crate::models::{
        BoxedContentGenerator, Content, ContentGenerator, GenerateContentRequest,
        GenerateContentResponse, ModelError,
    };
    pub use crate::providers::prelude::*;
}

// ============================================================================
// Logging
// ============================================================================

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, which
/// makes repeated calls harmless.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

// ============================================================================
// Version Information
// ============================================================================

/// Returns the current version of geminicli.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_version() {
        assert_eq!(version(), geminicli_core::version::PKG_VERSION);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        assert!(!init_tracing());
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let env = MapEnv::new().with(GEMINI_API_ENDPOINT, "https://custom-api.example.com");
        let config = ContentGeneratorConfig::new("gemini-pro", AuthType::UseGemini);
        let factory = ContentGeneratorFactory::new(Arc::new(env), Arc::new(GoogleGenAiFactory));

        let options = factory.client_options(&config).unwrap();
        assert_eq!(
            options.base_url.as_deref(),
            Some("https://custom-api.example.com")
        );
    }
}
