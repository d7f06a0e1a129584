//! Tool provider abstraction
//!
//! This module defines the [`ToolProvider`] trait, the seam through which a
//! package hands its tools to a host. The host owns a registry that maps
//! tool names to providers; a package only supplies definitions and
//! handlers, registered by an explicit call.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               ToolRegistry               │
//! │  (host side: discovery, routing)         │
//! └──────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//!    ┌───────────────┐    ┌───────────────┐
//!    │  WebScraper   │    │  other        │
//!    │  Provider     │    │  providers    │
//!    └───────────────┘    └───────────────┘
//! ```
//!
//! When two providers offer the same tool name, the one with the higher
//! [`priority`](ToolProvider::priority) wins.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolResult;

/// Error type for tool provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Tool not found in this provider
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Tool provider abstraction - a source of tools for the host
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Unique identifier for this provider (e.g. "webscraper")
    fn id(&self) -> &str;

    /// Display name for user-facing output
    fn display_name(&self) -> &str;

    /// Priority for tool resolution (higher = preferred)
    fn priority(&self) -> i32 {
        0
    }

    /// Check if the provider is available and properly configured
    async fn is_available(&self) -> bool;

    /// Discover available tools from this provider
    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError>;

    /// Execute a tool call
    ///
    /// The tool_name in the call must match one of the tools
    /// returned by `discover_tools()`. Dropping the returned future
    /// aborts any in-flight work.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
