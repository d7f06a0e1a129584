//! Request and result value objects for the two web operations

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::error::WebError;

/// User agent sent when the caller does not supply one
pub const DEFAULT_USER_AGENT: &str = "WebScraperAgent/1.0";

/// A validated request to fetch one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    url: Url,
    user_agent: String,
    timeout: Option<Duration>,
}

impl FetchRequest {
    /// Parse and validate a URL string.
    ///
    /// The URL must be non-empty, absolute, and use the `http` or `https`
    /// scheme; anything else is [`WebError::InvalidInput`].
    pub fn parse(url: &str) -> Result<Self, WebError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(WebError::InvalidInput("URL must not be empty".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| WebError::InvalidInput(format!("Malformed URL '{}': {}", trimmed, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebError::InvalidInput(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                url.scheme()
            )));
        }

        Ok(Self {
            url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        })
    }

    /// Override the user agent. An empty value keeps the default.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    /// Set a per-call deadline covering connect, headers and body
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Body of a successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub body: String,
    /// Number of bytes received, before decoding
    pub bytes: usize,
}

impl FetchResult {
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            bytes: body.len(),
            body,
        }
    }

    /// Decode a raw response body as UTF-8, replacing invalid sequences
    /// with U+FFFD. `bytes` keeps the length of `raw`.
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self {
            body: String::from_utf8_lossy(raw).into_owned(),
            bytes: raw.len(),
        }
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// HTML to extract visible text from. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub html: String,
}

impl ExtractRequest {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Visible text of a document body, outer whitespace trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    pub text: String,
}

impl ExtractResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_url() {
        let request = FetchRequest::parse("https://example.com/page?q=1").unwrap();
        assert_eq!(request.url().as_str(), "https://example.com/page?q=1");
        assert_eq!(request.user_agent(), DEFAULT_USER_AGENT);
        assert!(request.timeout().is_none());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            FetchRequest::parse("   "),
            Err(WebError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_not_a_url() {
        let err = FetchRequest::parse("not a url").unwrap_err();
        assert!(matches!(err, WebError::InvalidInput(_)));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        assert!(matches!(
            FetchRequest::parse("/just/a/path"),
            Err(WebError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unsupported_scheme() {
        let err = FetchRequest::parse("ftp://example.com/file").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_user_agent_override() {
        let request = FetchRequest::parse("http://example.com")
            .unwrap()
            .with_user_agent("CustomBot/2.0");
        assert_eq!(request.user_agent(), "CustomBot/2.0");
    }

    #[test]
    fn test_empty_user_agent_keeps_default() {
        let request = FetchRequest::parse("http://example.com")
            .unwrap()
            .with_user_agent("");
        assert_eq!(request.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_fetch_result_counts_raw_bytes() {
        let result = FetchResult::from_bytes(&[b'a', 0xff, b'b']);
        assert_eq!(result.bytes(), 3);
        assert_eq!(result.body, "a\u{FFFD}b");
        assert_eq!(result.body.len(), 5);

        assert_eq!(FetchResult::new("héllo").bytes(), 6);
    }

    #[test]
    fn test_timeout() {
        let request = FetchRequest::parse("http://example.com")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(request.timeout(), Some(Duration::from_secs(5)));
    }
}
