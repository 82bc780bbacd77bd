//! Client configuration
//!
//! One immutable config value carries the credential, the endpoint, and the
//! tunables (page size, pacing intervals). It is built once at process start
//! and passed by reference everywhere; there is no global state.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Default API endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Maximum page size the search and listing endpoints accept
pub const MAX_PAGE_SIZE: u32 = 100;

/// Environment variable the credential token is read from
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Immutable configuration for API access
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credential token, sent as `Authorization: token <value>` when present
    pub token: Option<String>,
    /// Base URL for all requests
    pub base_url: String,
    /// Records requested per page (capped by the service at 100)
    pub per_page: u32,
    /// Fixed pause between successive search-class requests
    pub search_interval: Duration,
    /// Fixed pause between successive listing-class requests
    pub list_interval: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: GITHUB_API_URL.to_string(),
            per_page: MAX_PAGE_SIZE,
            // Code search allows 30 requests/minute, so 2s between pages
            search_interval: Duration::from_secs(2),
            list_interval: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            user_agent: format!("lima-census/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a config with the token taken from `GITHUB_TOKEN`
    ///
    /// The variable is read exactly once; an empty value counts as absent.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }

    /// Whether a credential token is configured
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the credential token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the page size
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Set the pause between search-class requests
    pub fn search_interval(mut self, interval: Duration) -> Self {
        self.config.search_interval = interval;
        self
    }

    /// Set the pause between listing-class requests
    pub fn list_interval(mut self, interval: Duration) -> Self {
        self.config.list_interval = interval;
        self
    }

    /// Disable pacing entirely (intended for tests against a mock server)
    pub fn no_pacing(mut self) -> Self {
        self.config.search_interval = Duration::ZERO;
        self.config.list_interval = Duration::ZERO;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        Url::parse(&self.config.base_url)?;

        if self.config.per_page == 0 || self.config.per_page > MAX_PAGE_SIZE {
            return Err(Error::config(format!(
                "per_page must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.config.per_page
            )));
        }

        Ok(self.config)
    }
}
