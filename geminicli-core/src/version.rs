//! Version reporting and the `User-Agent` sent with every request.

use crate::env::EnvProvider;

/// Product token at the start of every `User-Agent`.
pub const USER_AGENT_PRODUCT: &str = "GeminiCLI";

/// Environment variable that overrides the reported CLI version.
pub const CLI_VERSION_ENV: &str = "CLI_VERSION";

/// Version this crate was built as.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reported CLI version: `CLI_VERSION` if set and non-empty, else the crate version.
pub fn cli_version(env: &dyn EnvProvider) -> String {
    env.get_non_empty(CLI_VERSION_ENV)
        .unwrap_or_else(|| PKG_VERSION.to_string())
}

/// `User-Agent` value, e.g. `GeminiCLI/0.1.0 (linux; x86_64)`.
pub fn user_agent(env: &dyn EnvProvider) -> String {
    format!(
        "{}/{} ({}; {})",
        USER_AGENT_PRODUCT,
        cli_version(env),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_agent_defaults_to_crate_version() {
        let ua = user_agent(&MapEnv::new());
        assert!(ua.starts_with(&format!("GeminiCLI/{PKG_VERSION} (")));
        assert!(ua.contains(std::env::consts::OS));
    }

    #[test]
    fn test_cli_version_override() {
        let env = MapEnv::new().with(CLI_VERSION_ENV, "1.2.3-nightly");
        assert_eq!(cli_version(&env), "1.2.3-nightly");
        assert!(user_agent(&env).starts_with("GeminiCLI/1.2.3-nightly "));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let env = MapEnv::new().with(CLI_VERSION_ENV, "");
        assert_eq!(cli_version(&env), PKG_VERSION);
    }
}
