//! Configuration file loading for webscraper
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WEBSCRAPER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./webscraper.toml` or `./.webscraper.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/webscraper/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileFetchConfig};
pub use loader::ConfigLoader;
