//! fetch_webpage tool: Fetch a URL and return the raw body

use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use webscraper_application::ports::page_fetcher::PageFetcherPort;
use webscraper_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use webscraper_domain::web::FetchRequest;

/// Tool name constant
pub const FETCH_WEBPAGE: &str = "fetch_webpage";

/// Get the tool definition for fetch_webpage
pub fn fetch_webpage_definition() -> ToolDefinition {
    ToolDefinition::new(FETCH_WEBPAGE, "Fetches the content of a webpage.")
        .with_parameter(ToolParameter::new("url", "The URL to fetch", true).with_type("url"))
}

/// Execute the fetch_webpage tool
///
/// On success the output is the response body, unmodified.
pub async fn execute_fetch_webpage(
    fetcher: &dyn PageFetcherPort,
    user_agent: &str,
    call: &ToolCall,
    cancellation: &CancellationToken,
) -> ToolResult {
    let start = Instant::now();

    let url = match call.require_string("url") {
        Ok(u) => u,
        Err(e) => return ToolResult::failure(FETCH_WEBPAGE, ToolError::invalid_argument(e)),
    };

    let request = match FetchRequest::parse(url) {
        Ok(r) => r.with_user_agent(user_agent),
        Err(e) => return ToolResult::failure(FETCH_WEBPAGE, e.into()),
    };

    match fetcher.fetch(&request, cancellation).await {
        Ok(result) => {
            let bytes = result.bytes();
            let metadata = ToolResultMetadata {
                duration_ms: Some(start.elapsed().as_millis() as u64),
                bytes: Some(bytes),
                status_code: Some(200),
            };
            debug!(tool = FETCH_WEBPAGE, url, bytes, "Tool succeeded");
            let body = result.into_body();
            ToolResult::success(FETCH_WEBPAGE, body).with_metadata(metadata)
        }
        Err(e) => {
            debug!(tool = FETCH_WEBPAGE, url, error = %e, "Tool failed");
            ToolResult::failure(FETCH_WEBPAGE, e.into())
                .with_duration(start.elapsed().as_millis() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::ReqwestPageFetcher;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_definition() {
        let def = fetch_webpage_definition();
        assert_eq!(def.name, "fetch_webpage");
        assert_eq!(def.description, "Fetches the content of a webpage.");
        assert_eq!(def.required_parameters().collect::<Vec<_>>(), vec!["url"]);
    }

    #[tokio::test]
    async fn test_fetch_tool_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("User-Agent", "ToolBot/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>page</p>"))
            .mount(&server)
            .await;

        let fetcher = ReqwestPageFetcher::new().unwrap();
        let call = ToolCall::new(FETCH_WEBPAGE).with_arg("url", server.uri());
        let result =
            execute_fetch_webpage(&fetcher, "ToolBot/1.0", &call, &CancellationToken::new()).await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some("<p>page</p>"));
        assert_eq!(result.metadata.bytes, Some(11));
        assert_eq!(result.metadata.status_code, Some(200));
        assert!(result.metadata.duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_fetch_tool_reports_received_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'a', 0xff, 0xfe, b'b']))
            .mount(&server)
            .await;

        let fetcher = ReqwestPageFetcher::new().unwrap();
        let call = ToolCall::new(FETCH_WEBPAGE).with_arg("url", server.uri());
        let result =
            execute_fetch_webpage(&fetcher, "ToolBot/1.0", &call, &CancellationToken::new()).await;

        assert_eq!(result.output(), Some("a\u{FFFD}\u{FFFD}b"));
        assert_eq!(result.metadata.bytes, Some(4));
    }

    #[tokio::test]
    async fn test_fetch_tool_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = ReqwestPageFetcher::new().unwrap();
        let call = ToolCall::new(FETCH_WEBPAGE).with_arg("url", server.uri());
        let result =
            execute_fetch_webpage(&fetcher, "ToolBot/1.0", &call, &CancellationToken::new()).await;

        assert!(!result.is_success());
        assert!(result.output().is_none());
        let error = result.error().unwrap();
        assert_eq!(error.code, "REMOTE_ERROR");
        assert_eq!(error.details.as_deref(), Some("status_code=500"));
    }

    #[tokio::test]
    async fn test_fetch_tool_invalid_url() {
        let fetcher = ReqwestPageFetcher::new().unwrap();
        let call = ToolCall::new(FETCH_WEBPAGE).with_arg("url", "not a url");
        let result =
            execute_fetch_webpage(&fetcher, "ToolBot/1.0", &call, &CancellationToken::new()).await;

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_fetch_tool_missing_url() {
        let fetcher = ReqwestPageFetcher::new().unwrap();
        let call = ToolCall::new(FETCH_WEBPAGE);
        let result =
            execute_fetch_webpage(&fetcher, "ToolBot/1.0", &call, &CancellationToken::new()).await;

        let error = result.error().unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert!(error.message.contains("url"));
    }
}
