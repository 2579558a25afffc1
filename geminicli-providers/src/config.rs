//! Content generator configuration.

use geminicli_core::{AuthType, EnvProvider};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// Model used when none is given.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Gemini API key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Google API key, used for Vertex AI express mode.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Google Cloud project for Vertex AI.
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
/// Google Cloud location for Vertex AI.
pub const GOOGLE_CLOUD_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";

/// Input to the content generator factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGeneratorConfig {
    /// Model name.
    pub model: String,
    /// API key for the direct client.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Vertex AI flag, passed to the client as given.
    pub vertexai: Option<bool>,
    /// How the user authenticates.
    pub auth_type: AuthType,
}

impl ContentGeneratorConfig {
    /// Create a config with no key and no Vertex flag.
    pub fn new(model: impl Into<String>, auth_type: AuthType) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            vertexai: None,
            auth_type,
        }
    }

    /// Set API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the Vertex AI flag.
    #[must_use]
    pub fn with_vertexai(mut self, vertexai: bool) -> Self {
        self.vertexai = Some(vertexai);
        self
    }

    /// Build a config for `auth_type` from environment variables.
    ///
    /// - OAuth kinds carry only the model and auth type.
    /// - `UseGemini` picks up `GEMINI_API_KEY`.
    /// - `UseVertexAi` picks up `GOOGLE_API_KEY` when it or both
    ///   `GOOGLE_CLOUD_PROJECT` and `GOOGLE_CLOUD_LOCATION` are set.
    ///
    /// An empty `model` falls back to [`DEFAULT_GEMINI_MODEL`].
    pub fn from_env(model: &str, auth_type: AuthType, env: &dyn EnvProvider) -> Self {
        let model = if model.is_empty() {
            DEFAULT_GEMINI_MODEL
        } else {
            model
        };
        let config = Self::new(model, auth_type);

        match auth_type {
            AuthType::LoginWithGooglePersonal | AuthType::LoginWithGoogleEnterprise => config,
            AuthType::UseGemini => match env.get_non_empty(GEMINI_API_KEY) {
                Some(key) => config.with_api_key(key).with_vertexai(false),
                None => config,
            },
            AuthType::UseVertexAi => {
                let google_api_key = env.get_non_empty(GOOGLE_API_KEY);
                if google_api_key.is_some() || has_vertex_project(env) {
                    Self {
                        api_key: google_api_key,
                        vertexai: Some(true),
                        ..config
                    }
                } else {
                    config
                }
            }
        }
    }
}

fn has_vertex_project(env: &dyn EnvProvider) -> bool {
    env.get_non_empty(GOOGLE_CLOUD_PROJECT).is_some()
        && env.get_non_empty(GOOGLE_CLOUD_LOCATION).is_some()
}

/// Check that the environment provides what `auth_type` needs.
pub fn validate_auth_method(auth_type: AuthType, env: &dyn EnvProvider) -> ProviderResult<()> {
    match auth_type {
        AuthType::LoginWithGooglePersonal | AuthType::LoginWithGoogleEnterprise => Ok(()),
        AuthType::UseGemini => {
            if env.get_non_empty(GEMINI_API_KEY).is_none() {
                return Err(ProviderError::AuthValidation(format!(
                    "{GEMINI_API_KEY} environment variable not found. \
                     Add that to your environment and try again!"
                )));
            }
            Ok(())
        }
        AuthType::UseVertexAi => {
            if env.get_non_empty(GOOGLE_API_KEY).is_none() && !has_vertex_project(env) {
                return Err(ProviderError::AuthValidation(format!(
                    "When using Vertex AI, you must specify either:\n\
                     - {GOOGLE_CLOUD_PROJECT} and {GOOGLE_CLOUD_LOCATION} environment variables.\n\
                     - {GOOGLE_API_KEY} environment variable (if using express mode).\n\
                     Update your environment and try again!"
                )));
            }
            Ok(())
        }
    }
}
