//! Tool Registry
//!
//! The [`ToolRegistry`] is a reference host: it aggregates tool providers
//! and implements [`ToolExecutorPort`]. It handles tool discovery, provider
//! resolution, and execution routing based on priority.
//!
//! # Usage
//!
//! ```ignore
//! use webscraper_infrastructure::tools::{ToolRegistry, WebScraperProvider};
//!
//! let mut registry = ToolRegistry::new()
//!     .register(WebScraperProvider::from_config(&config.fetch)?);
//!
//! // Discover available tools from all providers
//! registry.discover().await?;
//!
//! let call = ToolCall::new("fetch_webpage").with_arg("url", "https://example.com");
//! let result = registry.execute_with_cancellation(&call, &token).await;
//! ```
//!
//! # Discovery Process
//!
//! The `discover()` method must be called before using the registry:
//!
//! 1. Providers are sorted by priority (highest first)
//! 2. Unavailable providers are skipped
//! 3. Each provider's `discover_tools()` is called
//! 4. Tools are registered, with higher-priority providers winning conflicts

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use webscraper_application::ports::tool_executor::ToolExecutorPort;
use webscraper_domain::tool::{
    entities::{ToolCall, ToolSpec},
    provider::ToolProvider,
    value_objects::{ToolError, ToolResult},
};

/// Tool registry that aggregates multiple providers
///
/// When multiple providers offer the same tool, the one with higher
/// priority is used.
pub struct ToolRegistry {
    providers: Vec<Arc<dyn ToolProvider>>,
    /// Tool name -> provider ID mapping (cached after discovery)
    tool_mapping: HashMap<String, String>,
    tool_spec: ToolSpec,
    discovered: bool,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tool_mapping: HashMap::new(),
            tool_spec: ToolSpec::new(),
            discovered: false,
        }
    }

    /// Register a tool provider
    pub fn register<P: ToolProvider + 'static>(self, provider: P) -> Self {
        self.register_arc(Arc::new(provider))
    }

    /// Register a shared tool provider
    pub fn register_arc(mut self, provider: Arc<dyn ToolProvider>) -> Self {
        self.providers.push(provider);
        self.discovered = false;
        self
    }

    /// Discover tools from all providers
    ///
    /// Discovery failures of a single provider are logged and skipped.
    pub async fn discover(&mut self) -> Result<(), String> {
        self.providers
            .sort_by_key(|p| std::cmp::Reverse(p.priority()));

        let mut tool_spec = ToolSpec::new();
        let mut tool_mapping = HashMap::new();

        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::debug!(provider = provider.id(), "Provider not available, skipping");
                continue;
            }

            let tools = match provider.discover_tools().await {
                Ok(tools) => tools,
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        error = %e,
                        "Failed to discover tools from provider"
                    );
                    continue;
                }
            };

            for tool in tools {
                if tool_mapping.contains_key(&tool.name) {
                    tracing::trace!(
                        tool = %tool.name,
                        provider = provider.id(),
                        "Tool already registered by higher priority provider"
                    );
                    continue;
                }
                tracing::debug!(tool = %tool.name, provider = provider.id(), "Registered tool");
                tool_mapping.insert(tool.name.clone(), provider.id().to_string());
                tool_spec = tool_spec.register(tool);
            }
        }

        self.tool_spec = tool_spec;
        self.tool_mapping = tool_mapping;
        self.discovered = true;

        Ok(())
    }

    fn provider_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolProvider>> {
        let provider_id = self.tool_mapping.get(tool_name)?;
        self.providers.iter().find(|p| p.id() == provider_id)
    }

    /// Resolve the provider for a call, or the failure to report
    fn route(&self, call: &ToolCall) -> Result<&Arc<dyn ToolProvider>, ToolResult> {
        if !self.discovered {
            return Err(ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Registry not initialized. Call discover() first."),
            ));
        }

        self.provider_for(&call.tool_name).ok_or_else(|| {
            ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name))
        })
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_provider = HashMap::new();
        for provider_id in self.tool_mapping.values() {
            *tools_per_provider.entry(provider_id.clone()).or_insert(0) += 1;
        }

        RegistryStats {
            total_providers: self.providers.len(),
            total_tools: self.tool_mapping.len(),
            tools_per_provider,
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_providers: usize,
    pub total_tools: usize,
    pub tools_per_provider: HashMap<String, usize>,
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.route(call) {
            Ok(provider) => provider.execute(call).await,
            Err(failure) => failure,
        }
    }

    async fn execute_with_cancellation(
        &self,
        call: &ToolCall,
        cancellation: &CancellationToken,
    ) -> ToolResult {
        let provider = match self.route(call) {
            Ok(provider) => provider,
            Err(failure) => return failure,
        };

        // Dropping the provider future aborts any in-flight request
        tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                tracing::debug!(tool = %call.tool_name, provider = provider.id(), "Tool call cancelled");
                ToolResult::failure(&call.tool_name, ToolError::cancelled())
            }
            result = provider.execute(call) => result,
        }
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();

        match rt {
            Ok(rt) => rt.block_on(self.execute(call)),
            Err(e) => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(format!("Failed to create runtime: {}", e)),
            ),
        }
    }
}
