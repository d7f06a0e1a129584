//! Scrape Page use case.
//!
//! Chains the two web operations on the caller side: fetch a page, then
//! extract its visible text. The fetcher and the extractor never call each
//! other; this use case is the only place they meet.

use crate::ports::content_extractor::ContentExtractorPort;
use crate::ports::page_fetcher::PageFetcherPort;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use webscraper_domain::web::{ExtractRequest, FetchRequest, WebError};

/// Input for the [`ScrapePageUseCase`].
#[derive(Debug, Clone)]
pub struct ScrapePageInput {
    /// Absolute http(s) URL to fetch.
    pub url: String,
    /// User agent override; `None` uses the fetcher's default.
    pub user_agent: Option<String>,
    /// Per-call deadline.
    pub timeout: Option<Duration>,
}

impl ScrapePageInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: None,
            timeout: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Output of the [`ScrapePageUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapePageOutput {
    /// The URL as normalized by the parser.
    pub url: String,
    /// Size of the fetched HTML in bytes.
    pub html_bytes: usize,
    /// Visible text of the page body.
    pub text: String,
}

/// Use case for fetching a page and extracting its text.
#[derive(Clone)]
pub struct ScrapePageUseCase {
    fetcher: Arc<dyn PageFetcherPort>,
    extractor: Arc<dyn ContentExtractorPort>,
}

impl ScrapePageUseCase {
    pub fn new(fetcher: Arc<dyn PageFetcherPort>, extractor: Arc<dyn ContentExtractorPort>) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch `input.url` and extract its visible text.
    ///
    /// Errors from either step are returned unchanged.
    pub async fn execute(
        &self,
        input: ScrapePageInput,
        cancellation: &CancellationToken,
    ) -> Result<ScrapePageOutput, WebError> {
        let mut request = FetchRequest::parse(&input.url)?;
        if let Some(user_agent) = input.user_agent {
            request = request.with_user_agent(user_agent);
        }
        if let Some(timeout) = input.timeout {
            request = request.with_timeout(timeout);
        }

        info!(url = %request.url(), "Scraping page");

        let fetched = self.fetcher.fetch(&request, cancellation).await?;
        let html_bytes = fetched.bytes();
        let html = fetched.into_body();
        debug!(url = %request.url(), bytes = html_bytes, "Fetched page, extracting text");

        let text = self
            .extractor
            .extract(&ExtractRequest::new(html))?
            .into_text();

        Ok(ScrapePageOutput {
            url: request.url().to_string(),
            html_bytes,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use webscraper_domain::web::{ExtractResult, FetchResult};

    struct MockFetcher {
        response: Result<String, WebError>,
        seen: Mutex<Vec<(String, String, Option<Duration>)>>,
    }

    impl MockFetcher {
        fn returning(response: Result<String, WebError>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageFetcherPort for MockFetcher {
        async fn fetch(
            &self,
            request: &FetchRequest,
            cancellation: &CancellationToken,
        ) -> Result<FetchResult, WebError> {
            if cancellation.is_cancelled() {
                return Err(WebError::Cancelled);
            }
            self.seen.lock().unwrap().push((
                request.url().to_string(),
                request.user_agent().to_string(),
                request.timeout(),
            ));
            self.response.clone().map(FetchResult::new)
        }
    }

    struct UppercaseExtractor;

    impl ContentExtractorPort for UppercaseExtractor {
        fn extract(&self, request: &ExtractRequest) -> Result<ExtractResult, WebError> {
            Ok(ExtractResult::new(request.html.to_uppercase()))
        }
    }

    struct FailingExtractor;

    impl ContentExtractorPort for FailingExtractor {
        fn extract(&self, _request: &ExtractRequest) -> Result<ExtractResult, WebError> {
            Err(WebError::Parse("broken".into()))
        }
    }

    fn use_case(
        fetcher: Arc<MockFetcher>,
        extractor: Arc<dyn ContentExtractorPort>,
    ) -> ScrapePageUseCase {
        ScrapePageUseCase::new(fetcher, extractor)
    }

    #[tokio::test]
    async fn test_scrape_chains_fetch_and_extract() {
        let fetcher = Arc::new(MockFetcher::returning(Ok("hello".into())));
        let uc = use_case(fetcher.clone(), Arc::new(UppercaseExtractor));

        let output = uc
            .execute(
                ScrapePageInput::new("https://example.com/a"),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(output.url, "https://example.com/a");
        assert_eq!(output.html_bytes, 5);
        assert_eq!(output.text, "HELLO");
        assert_eq!(fetcher.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_scrape_passes_user_agent_and_timeout() {
        let fetcher = Arc::new(MockFetcher::returning(Ok(String::new())));
        let uc = use_case(fetcher.clone(), Arc::new(UppercaseExtractor));

        uc.execute(
            ScrapePageInput::new("http://example.com")
                .with_user_agent("Bot/9")
                .with_timeout(Duration::from_secs(2)),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        let seen = fetcher.seen.lock().unwrap();
        assert_eq!(seen[0].1, "Bot/9");
        assert_eq!(seen[0].2, Some(Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn test_scrape_invalid_url_skips_fetch() {
        let fetcher = Arc::new(MockFetcher::returning(Ok("unused".into())));
        let uc = use_case(fetcher.clone(), Arc::new(UppercaseExtractor));

        let err = uc
            .execute(ScrapePageInput::new("not a url"), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WebError::InvalidInput(_)));
        assert!(fetcher.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scrape_propagates_remote_error() {
        let fetcher = Arc::new(MockFetcher::returning(Err(WebError::Remote {
            status_code: 404,
        })));
        let uc = use_case(fetcher, Arc::new(UppercaseExtractor));

        let err = uc
            .execute(ScrapePageInput::new("https://example.com"), &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err, WebError::Remote { status_code: 404 });
    }

    #[tokio::test]
    async fn test_scrape_propagates_extract_error() {
        let fetcher = Arc::new(MockFetcher::returning(Ok("<html>".into())));
        let uc = use_case(fetcher, Arc::new(FailingExtractor));

        let err = uc
            .execute(ScrapePageInput::new("https://example.com"), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WebError::Parse(_)));
    }

    #[tokio::test]
    async fn test_scrape_cancelled() {
        let fetcher = Arc::new(MockFetcher::returning(Ok("unused".into())));
        let uc = use_case(fetcher, Arc::new(UppercaseExtractor));
        let token = CancellationToken::new();
        token.cancel();

        let err = uc
            .execute(ScrapePageInput::new("https://example.com"), &token)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
    }
}
