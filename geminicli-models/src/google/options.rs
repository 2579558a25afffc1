//! Constructor arguments for the GenAI client.
//!
//! Field presence matters on the wire: `apiKey` and `vertexai` are always
//! serialized (as `null` when unset), while `baseUrl` is left out entirely
//! when no endpoint override applies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Name of the user-agent header.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// HTTP options forwarded to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpOptions {
    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// API version override (e.g. `v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default, rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl HttpOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only a `User-Agent` header.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self::new().with_header(USER_AGENT_HEADER, user_agent)
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The `User-Agent` header, if set.
    pub fn user_agent(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(USER_AGENT_HEADER))
            .map(|(_, value)| value.as_str())
    }

    /// The request timeout, if set.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Arguments for constructing a GenAI client.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGenAiOptions {
    /// API key, passed through as given.
    pub api_key: Option<String>,
    /// Vertex AI flag, passed through as given.
    pub vertexai: Option<bool>,
    /// Custom endpoint; absent means the library default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// HTTP options.
    #[serde(default)]
    pub http_options: HttpOptions,
}

impl GoogleGenAiOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
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

    /// Set the endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set HTTP options.
    #[must_use]
    pub fn with_http_options(mut self, http_options: HttpOptions) -> Self {
        self.http_options = http_options;
        self
    }

    /// Whether the client targets Vertex AI.
    pub fn is_vertex(&self) -> bool {
        self.vertexai.unwrap_or(false)
    }
}

impl fmt::Debug for GoogleGenAiOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleGenAiOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("vertexai", &self.vertexai)
            .field("base_url", &self.base_url)
            .field("http_options", &self.http_options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_absent_base_url_is_omitted() {
        let options = GoogleGenAiOptions::new()
            .with_api_key("test-key")
            .with_http_options(HttpOptions::with_user_agent("GeminiCLI/1.0.0"));

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "apiKey": "test-key",
                "vertexai": null,
                "httpOptions": {"headers": {"User-Agent": "GeminiCLI/1.0.0"}}
            })
        );
    }

    #[test]
    fn test_present_base_url_is_serialized() {
        let options = GoogleGenAiOptions::new()
            .with_vertexai(true)
            .with_base_url("https://vertex-proxy.example.com");
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["baseUrl"], "https://vertex-proxy.example.com");
        assert_eq!(json["vertexai"], true);
        assert_eq!(json["apiKey"], serde_json::Value::Null);
    }

    #[test]
    fn test_user_agent_lookup_is_case_insensitive() {
        let http = HttpOptions::new().with_header("user-agent", "GeminiCLI/2.0.0");
        assert_eq!(http.user_agent(), Some("GeminiCLI/2.0.0"));
        assert_eq!(HttpOptions::new().user_agent(), None);
    }

    #[test]
    fn test_timeout_round_trips_through_millis() {
        let http = HttpOptions::new().with_timeout(Duration::from_secs(2));
        assert_eq!(http.timeout_ms, Some(2000));
        assert_eq!(http.timeout(), Some(Duration::from_secs(2)));
        assert_eq!(serde_json::to_value(&http).unwrap()["timeout"], 2000);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let options = GoogleGenAiOptions::new().with_api_key("super-secret");
        let debug = format!("{options:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
