//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod fetch;

pub use fetch::FileFetchConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("fetch.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("fetch.connect_timeout_seconds cannot be 0")]
    InvalidConnectTimeout,

    #[error("fetch.user_agent cannot be empty")]
    EmptyUserAgent,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Page fetcher settings
    pub fetch: FileFetchConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.fetch.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.fetch.connect_timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidConnectTimeout);
        }
        if self.fetch.user_agent.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyUserAgent);
        }

        issues
    }
}
