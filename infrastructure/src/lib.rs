//! Infrastructure layer for webscraper
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the `reqwest` page fetcher, the `scraper`
//! content extractor, the tool provider handed to agent hosts, and
//! configuration file loading.

pub mod config;
pub mod tools;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileFetchConfig};
pub use tools::{
    JsonSchemaToolConverter, RegistryStats, ToolRegistry, WEBSCRAPER_PROVIDER_ID,
    WebScraperProvider, default_tool_spec,
};
pub use web::{HtmlContentExtractor, ReqwestPageFetcher, extract_visible_text};
