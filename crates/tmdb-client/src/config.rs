//! Client configuration
//!
//! The catalog API authenticates every request with one static bearer token.
//! It is read from the process environment once at startup and then passed
//! into the client as a plain value.

use crate::{Error, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Default TMDB v3 API root
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Environment variable holding the API bearer token
pub const TOKEN_ENV_VAR: &str = "TMDB_API_TOKEN";

/// Environment variable overriding the API root
pub const BASE_URL_ENV_VAR: &str = "TMDB_BASE_URL";

/// Configuration for the catalog client
#[derive(Clone)]
pub struct ClientConfig {
    /// API root (e.g., "https://api.themoviedb.org/3")
    pub base_url: String,
    /// Static bearer credential sent with every request
    pub bearer_token: String,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bearer_token: String::new(),
            timeout: None,
            user_agent: format!("cinema-deck/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config for the default API root with a bearer token
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            ..Default::default()
        }
    }

    /// Build a config from `TMDB_API_TOKEN` and the optional `TMDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    ///
    /// Used by [`ClientConfig::from_env`]; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", TOKEN_ENV_VAR)))?;

        let mut config = Self::new(token);
        if let Some(base_url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.is_empty()) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}
