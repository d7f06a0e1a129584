//! extract_content tool: Visible text of an HTML document

use std::time::Instant;
use webscraper_application::ports::content_extractor::ContentExtractorPort;
use webscraper_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use webscraper_domain::web::ExtractRequest;

/// Tool name constant
pub const EXTRACT_CONTENT: &str = "extract_content";

/// Get the tool definition for extract_content
pub fn extract_content_definition() -> ToolDefinition {
    ToolDefinition::new(EXTRACT_CONTENT, "Extracts visible text content from HTML.").with_parameter(
        ToolParameter::new("html", "The HTML document to extract text from", true)
            .with_type("html"),
    )
}

/// Execute the extract_content tool
pub fn execute_extract_content(extractor: &dyn ContentExtractorPort, call: &ToolCall) -> ToolResult {
    let start = Instant::now();

    let html = match call.require_string("html") {
        Ok(h) => h,
        Err(e) => return ToolResult::failure(EXTRACT_CONTENT, ToolError::invalid_argument(e)),
    };

    match extractor.extract(&ExtractRequest::new(html)) {
        Ok(result) => {
            let text = result.into_text();
            let metadata = ToolResultMetadata {
                duration_ms: Some(start.elapsed().as_millis() as u64),
                bytes: Some(text.len()),
                status_code: None,
            };
            ToolResult::success(EXTRACT_CONTENT, text).with_metadata(metadata)
        }
        Err(e) => ToolResult::failure(EXTRACT_CONTENT, e.into()),
    }
}
