//! Authentication kinds.
//!
//! The auth kind decides how a content generator is built: OAuth kinds go
//! through the code-assist path, API-key kinds construct a direct client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the user authenticates against Gemini.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    /// Interactive Google login with a personal account.
    #[serde(rename = "oauth-personal")]
    LoginWithGooglePersonal,
    /// Interactive Google login with a Workspace / enterprise account.
    #[serde(rename = "oauth-enterprise")]
    LoginWithGoogleEnterprise,
    /// Direct Gemini API key.
    #[serde(rename = "gemini-api-key")]
    UseGemini,
    /// Vertex AI, with an API key or project/location.
    #[serde(rename = "vertex-ai")]
    UseVertexAi,
}

impl AuthType {
    /// All known auth kinds.
    pub const ALL: [AuthType; 4] = [
        AuthType::LoginWithGooglePersonal,
        AuthType::LoginWithGoogleEnterprise,
        AuthType::UseGemini,
        AuthType::UseVertexAi,
    ];

    /// The identifier used in settings files and on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::LoginWithGooglePersonal => "oauth-personal",
            AuthType::LoginWithGoogleEnterprise => "oauth-enterprise",
            AuthType::UseGemini => "gemini-api-key",
            AuthType::UseVertexAi => "vertex-ai",
        }
    }

    /// Whether this kind logs in through OAuth (code-assist path).
    #[must_use]
    pub fn is_oauth(&self) -> bool {
        matches!(
            self,
            AuthType::LoginWithGooglePersonal | AuthType::LoginWithGoogleEnterprise
        )
    }

    /// Whether this kind authenticates with an API key against the GenAI SDK.
    #[must_use]
    pub fn is_api_key(&self) -> bool {
        !self.is_oauth()
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an auth type string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported auth type: {0}")]
pub struct ParseAuthTypeError(pub String);

impl FromStr for AuthType {
    type Err = ParseAuthTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseAuthTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("oauth-personal", AuthType::LoginWithGooglePersonal)]
    #[case("oauth-enterprise", AuthType::LoginWithGoogleEnterprise)]
    #[case("gemini-api-key", AuthType::UseGemini)]
    #[case("vertex-ai", AuthType::UseVertexAi)]
    fn test_parse_known(#[case] input: &str, #[case] expected: AuthType) {
        assert_eq!(input.parse::<AuthType>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "login-with-magic".parse::<AuthType>().unwrap_err();
        assert_eq!(err, ParseAuthTypeError("login-with-magic".to_string()));
        assert!(err.to_string().contains("login-with-magic"));
    }

    #[test]
    fn test_families() {
        assert!(AuthType::LoginWithGooglePersonal.is_oauth());
        assert!(AuthType::LoginWithGoogleEnterprise.is_oauth());
        assert!(AuthType::UseGemini.is_api_key());
        assert!(AuthType::UseVertexAi.is_api_key());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&AuthType::UseVertexAi).unwrap();
        assert_eq!(json, "\"vertex-ai\"");

        let parsed: AuthType = serde_json::from_str("\"oauth-personal\"").unwrap();
        assert_eq!(parsed, AuthType::LoginWithGooglePersonal);

        assert!(serde_json::from_str::<AuthType>("\"cloud-magic\"").is_err());
    }
}
