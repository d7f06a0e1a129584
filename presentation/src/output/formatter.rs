//! Output formatter trait

use webscraper_application::ScrapePageOutput;
use webscraper_domain::tool::ToolResult;

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format a fetched page body
    fn format_page(&self, url: &str, body: &str) -> String;

    /// Format text extracted from an HTML document
    fn format_text(&self, text: &str) -> String;

    /// Format the result of a fetch-then-extract run
    fn format_scrape(&self, output: &ScrapePageOutput) -> String;

    /// Format tool schemas for listing
    fn format_tools(&self, schemas: &[serde_json::Value]) -> String;

    /// Format the result of a tool call
    fn format_tool_result(&self, result: &ToolResult) -> String;
}
