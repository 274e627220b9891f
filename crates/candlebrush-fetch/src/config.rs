// File: crates/candlebrush-fetch/src/config.rs
// Summary: HTTP fetch configuration with builder-style overrides.

use std::time::Duration;

/// Configuration for [`crate::HttpSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URL returning a JSON array of raw rows.
    pub url: String,
    /// Whole-request timeout, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: crate::DEFAULT_DATA_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("candlebrush/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Default::default() }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
