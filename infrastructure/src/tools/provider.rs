//! Web scraper tool provider
//!
//! Hands `fetch_webpage` and `extract_content` to a host through the
//! [`ToolProvider`] seam. The provider owns its ports; the host only sees
//! definitions and results.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use webscraper_application::ports::{
    content_extractor::ContentExtractorPort, page_fetcher::PageFetcherPort,
};
use webscraper_domain::tool::{
    DefaultToolValidator, ToolError, ToolValidator,
    entities::{ToolCall, ToolDefinition, ToolSpec},
    provider::{ProviderError, ToolProvider},
    value_objects::ToolResult,
};
use webscraper_domain::web::{DEFAULT_USER_AGENT, WebError};

use crate::config::FileFetchConfig;
use crate::tools::web::{self, EXTRACT_CONTENT, FETCH_WEBPAGE};
use crate::web::{HtmlContentExtractor, ReqwestPageFetcher};

/// Identifier under which the provider registers with a host
pub const WEBSCRAPER_PROVIDER_ID: &str = "webscraper";

/// Tool provider for the web scraping tools
pub struct WebScraperProvider {
    fetcher: Arc<dyn PageFetcherPort>,
    extractor: Arc<dyn ContentExtractorPort>,
    user_agent: String,
    tool_spec: ToolSpec,
    /// Parent token; every fetch also stops when this fires
    cancellation: CancellationToken,
}

impl WebScraperProvider {
    pub fn new(
        fetcher: Arc<dyn PageFetcherPort>,
        extractor: Arc<dyn ContentExtractorPort>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tool_spec: crate::tools::default_tool_spec(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Build a provider backed by `reqwest` and `scraper`
    pub fn from_config(config: &FileFetchConfig) -> Result<Self, WebError> {
        let fetcher = ReqwestPageFetcher::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), Arc::new(HtmlContentExtractor::new()))
            .with_user_agent(&config.user_agent))
    }

    /// Set the user agent sent by `fetch_webpage` (empty keeps the default)
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    /// Tie in-flight fetches to a host-owned token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    async fn execute_internal(&self, call: &ToolCall) -> Result<ToolResult, ProviderError> {
        let definition = self
            .tool_spec
            .get(&call.tool_name)
            .ok_or_else(|| ProviderError::ToolNotFound(call.tool_name.clone()))?;

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return Ok(ToolResult::failure(
                &call.tool_name,
                ToolError::invalid_argument(e),
            ));
        }

        let result = match call.tool_name.as_str() {
            FETCH_WEBPAGE => {
                let token = self.cancellation.child_token();
                web::execute_fetch_webpage(self.fetcher.as_ref(), &self.user_agent, call, &token)
                    .await
            }
            EXTRACT_CONTENT => web::execute_extract_content(self.extractor.as_ref(), call),
            _ => return Err(ProviderError::ToolNotFound(call.tool_name.clone())),
        };

        Ok(result)
    }
}

#[async_trait]
impl ToolProvider for WebScraperProvider {
    fn id(&self) -> &str {
        WEBSCRAPER_PROVIDER_ID
    }

    fn display_name(&self) -> &str {
        "Web Scraper"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(self.tool_spec.all().cloned().collect())
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.execute_internal(call).await {
            Ok(result) => result,
            Err(ProviderError::ToolNotFound(name)) => {
                ToolResult::failure(&call.tool_name, ToolError::not_found(name))
            }
        }
    }
}
