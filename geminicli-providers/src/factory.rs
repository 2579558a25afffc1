//! Content generator factory.
//!
//! [`ContentGeneratorFactory`] turns a [`ContentGeneratorConfig`] into a
//! client handle. OAuth auth types are handed to a [`CodeAssistFactory`];
//! API-key auth types get a direct GenAI client built through a
//! [`GenAiClientFactory`] from freshly resolved [`GoogleGenAiOptions`].

use async_trait::async_trait;
use geminicli_core::{user_agent, AuthType, ProcessEnv, SharedEnv};
use geminicli_models::google::{GoogleGenAi, GoogleGenAiOptions, HttpOptions};
use geminicli_models::{BoxedContentGenerator, ModelResult};
use std::fmt;
use std::sync::Arc;

use crate::config::ContentGeneratorConfig;
use crate::endpoint::resolve_endpoint_override;
use crate::error::{ProviderError, ProviderResult};

/// Constructs the direct GenAI client.
pub trait GenAiClientFactory: Send + Sync {
    /// Build a client from constructor arguments.
    fn create(&self, options: GoogleGenAiOptions) -> ModelResult<BoxedContentGenerator>;
}

/// Builds [`GoogleGenAi`] clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleGenAiFactory;

impl GenAiClientFactory for GoogleGenAiFactory {
    fn create(&self, options: GoogleGenAiOptions) -> ModelResult<BoxedContentGenerator> {
        Ok(Arc::new(GoogleGenAi::new(options)?))
    }
}

/// Builds OAuth-backed (code assist) content generators.
#[async_trait]
pub trait CodeAssistFactory: Send + Sync {
    /// Log in for `auth_type` and return a generator.
    async fn create(
        &self,
        http_options: HttpOptions,
        auth_type: AuthType,
    ) -> ModelResult<BoxedContentGenerator>;
}

/// Resolves configuration into content generators.
#[derive(Clone)]
pub struct ContentGeneratorFactory {
    env: SharedEnv,
    genai: Arc<dyn GenAiClientFactory>,
    code_assist: Option<Arc<dyn CodeAssistFactory>>,
}

impl ContentGeneratorFactory {
    /// Create a factory over `env` that builds direct clients with `genai`.
    pub fn new(env: SharedEnv, genai: Arc<dyn GenAiClientFactory>) -> Self {
        Self {
            env,
            genai,
            code_assist: None,
        }
    }

    /// Factory over the process environment building [`GoogleGenAi`] clients.
    pub fn from_env() -> Self {
        Self::new(Arc::new(ProcessEnv), Arc::new(GoogleGenAiFactory))
    }

    /// Set the factory used for OAuth auth types.
    #[must_use]
    pub fn with_code_assist(mut self, code_assist: Arc<dyn CodeAssistFactory>) -> Self {
        self.code_assist = Some(code_assist);
        self
    }

    /// HTTP options shared by both paths: just the `User-Agent` header.
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions::with_user_agent(user_agent(self.env.as_ref()))
    }

    /// Constructor arguments for the direct client, or `None` for OAuth auth types.
    ///
    /// The endpoint override is read from the environment on every call.
    pub fn client_options(&self, config: &ContentGeneratorConfig) -> Option<GoogleGenAiOptions> {
        match config.auth_type {
            AuthType::LoginWithGooglePersonal | AuthType::LoginWithGoogleEnterprise => None,
            AuthType::UseGemini | AuthType::UseVertexAi => Some(GoogleGenAiOptions {
                api_key: config.api_key.clone(),
                vertexai: config.vertexai,
                base_url: resolve_endpoint_override(self.env.as_ref()),
                http_options: self.http_options(),
            }),
        }
    }

    /// Create a content generator for `config`.
    ///
    /// The direct client constructor runs exactly once for API-key auth types
    /// and never for OAuth ones. Constructor errors are returned unchanged.
    pub async fn create_content_generator(
        &self,
        config: &ContentGeneratorConfig,
    ) -> ProviderResult<BoxedContentGenerator> {
        tracing::debug!(
            auth_type = %config.auth_type,
            model = %config.model,
            "creating content generator"
        );

        let Some(options) = self.client_options(config) else {
            let code_assist = self
                .code_assist
                .as_ref()
                .ok_or(ProviderError::CodeAssistUnavailable(config.auth_type))?;
            tracing::debug!("delegating to code assist");
            return Ok(code_assist
                .create(self.http_options(), config.auth_type)
                .await?);
        };

        tracing::debug!(
            base_url = ?options.base_url,
            vertexai = ?options.vertexai,
            "constructing GenAI client"
        );
        Ok(self.genai.create(options)?)
    }
}

impl fmt::Debug for ContentGeneratorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentGeneratorFactory")
            .field("env", &self.env)
            .field("code_assist", &self.code_assist.is_some())
            .finish_non_exhaustive()
    }
}
