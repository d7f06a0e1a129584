//! Tool Executor port
//!
//! Defines the interface a host uses to invoke tools by name.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use webscraper_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how a host executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a tool call asynchronously
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Execute a tool call, aborting it when `cancellation` fires.
    ///
    /// A cancelled call yields a failed result with code `CANCELLED`.
    async fn execute_with_cancellation(
        &self,
        call: &ToolCall,
        cancellation: &CancellationToken,
    ) -> ToolResult;

    /// Execute a tool call synchronously (blocking)
    fn execute_sync(&self, call: &ToolCall) -> ToolResult;
}
