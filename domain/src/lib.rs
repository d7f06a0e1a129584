//! Domain layer for webscraper
//!
//! This crate contains the core types: tool definitions handed to a host,
//! tool results and errors, and the request/result value objects of the two
//! web operations. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Fetch**: one HTTP GET of an absolute URL, body returned as text
//! - **Extract**: visible text of an HTML document body
//! - **Tool**: a named operation with a static parameter schema, invoked by
//!   an external host

pub mod tool;
pub mod web;

// Re-export commonly used types
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    provider::{ProviderError, ToolProvider},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
pub use web::{
    DEFAULT_USER_AGENT, ExtractRequest, ExtractResult, FetchRequest, FetchResult, WebError,
};
