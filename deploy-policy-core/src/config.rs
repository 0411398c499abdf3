//! Typed provider configuration.
//!
//! The client handle and owner are built once from this struct and passed
//! into the service, never held as hidden global state.

use crate::error::{ControllerError, ControllerResult};

/// Environment variable holding the GitHub authentication token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable holding the organization or account namespace.
pub const OWNER_ENV: &str = "GITHUB_OWNER";
/// Environment variable overriding the API base URL (GitHub Enterprise).
pub const BASE_URL_ENV: &str = "GITHUB_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Token with permission to manage repository environments.
    pub token: String,
    /// Organization or account that owns the repositories.
    pub owner: String,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(token: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            owner: owner.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the configuration from `GITHUB_TOKEN`, `GITHUB_OWNER` and
    /// optionally `GITHUB_BASE_URL`.
    pub fn from_env() -> ControllerResult<Self> {
        let token = require_env(TOKEN_ENV)?;
        let owner = require_env(OWNER_ENV)?;
        let config = Self::new(token, owner);
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => Ok(config.with_base_url(base_url)),
            _ => Ok(config),
        }
    }
}

fn require_env(key: &'static str) -> ControllerResult<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ControllerError::MissingConfig(key))
}
