//! Environment variable lookup.
//!
//! Everything that reads environment variables goes through [`EnvProvider`]
//! so callers can swap the real process environment for a fixed map.

use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Read-only key/value lookup over environment variables.
pub trait EnvProvider: Send + Sync + fmt::Debug {
    /// Value of `name`, or `None` if it is unset or not valid unicode.
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, treating an empty string as unset.
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// First non-empty value among `names`, in order.
    fn first_non_empty(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.get_non_empty(name))
    }
}

/// Type alias for shared environment providers.
pub type SharedEnv = Arc<dyn EnvProvider>;

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    /// Non-unicode values are logged and read as unset, so lookups such as
    /// [`EnvProvider::first_non_empty`] move on to the next name.
    fn get(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(name, "ignoring environment variable that is not valid unicode");
                None
            }
        }
    }
}

/// A fixed set of variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a variable in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("A", "1").with("EMPTY", "");

        assert_eq!(env.get("A"), Some("1".to_string()));
        assert_eq!(env.get("EMPTY"), Some(String::new()));
        assert_eq!(env.get_non_empty("EMPTY"), None);
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_first_non_empty_respects_order() {
        let env: MapEnv = [("FIRST", ""), ("SECOND", "two"), ("THIRD", "three")]
            .into_iter()
            .collect();

        assert_eq!(
            env.first_non_empty(&["FIRST", "SECOND", "THIRD"]),
            Some("two".to_string())
        );
        assert_eq!(env.first_non_empty(&["NOPE", "FIRST"]), None);
    }

    #[test]
    fn test_set_and_remove() {
        let mut env = MapEnv::new();
        env.set("KEY", "value");
        assert_eq!(env.get("KEY"), Some("value".to_string()));
        assert_eq!(env.remove("KEY"), Some("value".to_string()));
        assert_eq!(env.get("KEY"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_unicode_reads_as_unset() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "GEMINICLI_ENV_TEST_NON_UNICODE";
        std::env::set_var(name, OsStr::from_bytes(b"https://\xff.example.com"));
        std::env::set_var("GEMINICLI_ENV_TEST_FALLBACK", "https://fallback.example.com");

        assert_eq!(ProcessEnv.get(name), None);
        assert_eq!(
            ProcessEnv.first_non_empty(&[name, "GEMINICLI_ENV_TEST_FALLBACK"]),
            Some("https://fallback.example.com".to_string())
        );
    }

    #[test]
    fn test_process_env_matches_std() {
        assert_eq!(ProcessEnv.get("PATH"), std::env::var("PATH").ok());
    }
}
