//! Application layer for webscraper
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    content_extractor::ContentExtractorPort, page_fetcher::PageFetcherPort,
    tool_executor::ToolExecutorPort, tool_schema::ToolSchemaPort,
};
pub use use_cases::scrape_page::{ScrapePageInput, ScrapePageOutput, ScrapePageUseCase};
