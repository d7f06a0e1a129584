//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod content_extractor;
pub mod page_fetcher;
pub mod tool_executor;
pub mod tool_schema;
