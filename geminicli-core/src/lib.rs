//! # geminicli-core
//!
//! Core types shared by the geminicli crates:
//!
//! - **Auth**: [`AuthType`], the closed set of authentication kinds
//! - **Environment**: [`EnvProvider`] and its process / fixed-map implementations
//! - **Version**: the `GeminiCLI/<version>` user agent
//!
//! ## Example
//!
//! ```rust
//! use geminicli_core::{user_agent, AuthType, MapEnv};
//!
//! let auth: AuthType = "gemini-api-key".parse().unwrap();
//! assert!(auth.is_api_key());
//!
//! let env = MapEnv::new().with("CLI_VERSION", "1.0.0");
//! assert!(user_agent(&env).starts_with("GeminiCLI/1.0.0"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod env;
pub mod version;

pub use auth::{AuthType, ParseAuthTypeError};
pub use env::{EnvProvider, MapEnv, ProcessEnv, SharedEnv};
pub use version::{cli_version, user_agent, USER_AGENT_PRODUCT};
