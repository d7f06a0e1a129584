//! Fetch configuration from TOML (`[fetch]` section)
//!
//! ```toml
//! [fetch]
//! user_agent = "WebScraperAgent/1.0"
//! timeout_seconds = 30
//! connect_timeout_seconds = 10
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use webscraper_domain::web::DEFAULT_USER_AGENT;

/// Raw `[fetch]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Whole-request deadline in seconds (absent = none)
    pub timeout_seconds: Option<u64>,
    /// Connection setup deadline in seconds (absent = none)
    pub connect_timeout_seconds: Option<u64>,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
        }
    }
}

impl FileFetchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }

    /// User agent for one request: `requested` unless absent or empty,
    /// otherwise the configured value
    pub fn resolve_user_agent<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .filter(|ua| !ua.is_empty())
            .unwrap_or(&self.user_agent)
    }
}
