//! Custom API endpoint resolution.

use geminicli_core::EnvProvider;

/// Primary endpoint override.
pub const GEMINI_API_ENDPOINT: &str = "GEMINI_API_ENDPOINT";
/// Secondary endpoint override, consulted when the primary is unset or empty.
pub const GOOGLE_GENAI_ENDPOINT: &str = "GOOGLE_GENAI_ENDPOINT";

/// Resolve the endpoint override, `None` meaning the library default.
///
/// `GEMINI_API_ENDPOINT` wins over `GOOGLE_GENAI_ENDPOINT`; empty values are
/// treated as unset, as are values that are not valid unicode. The value is
/// returned verbatim.
pub fn resolve_endpoint_override(env: &dyn EnvProvider) -> Option<String> {
    env.first_non_empty(&[GEMINI_API_ENDPOINT, GOOGLE_GENAI_ENDPOINT])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geminicli_core::MapEnv;
    use rstest::rstest;

    #[rstest]
    #[case::neither(None, None, None)]
    #[case::primary_only(
        Some("https://custom-api.example.com"),
        None,
        Some("https://custom-api.example.com")
    )]
    #[case::secondary_only(
        None,
        Some("https://alternative-api.example.com"),
        Some("https://alternative-api.example.com")
    )]
    #[case::primary_wins(
        Some("https://primary-api.example.com"),
        Some("https://secondary-api.example.com"),
        Some("https://primary-api.example.com")
    )]
    #[case::empty_primary_falls_through(
        Some(""),
        Some("https://secondary-api.example.com"),
        Some("https://secondary-api.example.com")
    )]
    #[case::both_empty(Some(""), Some(""), None)]
    fn test_resolution(
        #[case] primary: Option<&str>,
        #[case] secondary: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut env = MapEnv::new();
        if let Some(value) = primary {
            env.set(GEMINI_API_ENDPOINT, value);
        }
        if let Some(value) = secondary {
            env.set(GOOGLE_GENAI_ENDPOINT, value);
        }

        assert_eq!(resolve_endpoint_override(&env).as_deref(), expected);
    }
}
