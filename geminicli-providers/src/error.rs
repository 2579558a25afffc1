//! Provider error types.

use geminicli_core::AuthType;
use geminicli_models::ModelError;

/// Errors raised while configuring or creating a content generator.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The environment does not satisfy the chosen auth method.
    #[error("{0}")]
    AuthValidation(String),

    /// An OAuth auth type was selected but no code-assist factory is configured.
    #[error("No code assist client is configured for auth type {0}")]
    CodeAssistUnavailable(AuthType),

    /// Failure from the client constructor or the client itself.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
