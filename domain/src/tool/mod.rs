//! Tool domain module
//!
//! This module defines the abstractions through which the web scraping
//! capabilities are handed to an external host.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (definitions)│    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Set of available tool definitions
//! - [`ToolDefinition`]: Static schema for a single tool (name, params)
//! - [`ToolCall`]: An invocation request with arguments
//! - [`ToolResult`]: Execution outcome with structured metadata
//! - [`ToolValidator`]: Pure domain trait for parameter validation
//! - [`ToolProvider`]: Seam through which a package supplies its tools

pub mod entities;
pub mod provider;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use provider::{ProviderError, ToolProvider};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
