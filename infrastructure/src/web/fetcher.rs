//! `reqwest`-backed page fetcher

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use webscraper_application::ports::page_fetcher::PageFetcherPort;
use webscraper_domain::web::{FetchRequest, FetchResult, WebError};

use crate::config::FileFetchConfig;

/// Fetches pages with a shared [`reqwest::Client`].
///
/// The client keeps its default redirect policy. Timeouts are optional:
/// `timeout` bounds the whole request (connect, headers and body) unless the
/// request carries its own deadline, `connect_timeout` bounds connection
/// setup only.
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
    default_timeout: Option<Duration>,
}

impl ReqwestPageFetcher {
    /// Create a fetcher without any client-side deadline
    pub fn new() -> Result<Self, WebError> {
        Self::with_timeouts(None, None)
    }

    pub fn with_timeouts(
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, WebError> {
        let mut builder = reqwest::Client::builder();
        if let Some(connect_timeout) = connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WebError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a fetcher from the `[fetch]` configuration section
    pub fn from_config(config: &FileFetchConfig) -> Result<Self, WebError> {
        Self::with_timeouts(config.timeout(), config.connect_timeout())
    }
}

#[async_trait]
impl PageFetcherPort for ReqwestPageFetcher {
    async fn fetch(
        &self,
        request: &FetchRequest,
        cancellation: &CancellationToken,
    ) -> Result<FetchResult, WebError> {
        if cancellation.is_cancelled() {
            return Err(WebError::Cancelled);
        }

        let start = Instant::now();
        let mut builder = self
            .client
            .get(request.url().clone())
            .header(USER_AGENT, request.user_agent());
        if let Some(timeout) = request.timeout().or(self.default_timeout) {
            builder = builder.timeout(timeout);
        }

        debug!(url = %request.url(), user_agent = request.user_agent(), "Fetching web page");

        // Dropping the pending future on cancellation aborts the request and
        // returns the connection.
        let response = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!(url = %request.url(), "Fetch cancelled before response");
                return Err(WebError::Cancelled);
            }
            result = builder.send() => result.map_err(send_error)?,
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %request.url(), status = status.as_u16(), "Unexpected HTTP status");
            return Err(WebError::Remote {
                status_code: status.as_u16(),
            });
        }

        let bytes = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!(url = %request.url(), "Fetch cancelled while reading body");
                return Err(WebError::Cancelled);
            }
            result = response.bytes() => result.map_err(body_error)?,
        };

        debug!(
            url = %request.url(),
            status = status.as_u16(),
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched web page"
        );

        Ok(FetchResult::from_bytes(&bytes))
    }
}

fn send_error(err: reqwest::Error) -> WebError {
    if err.is_timeout() {
        WebError::Timeout(err.to_string())
    } else if err.is_builder() {
        WebError::InvalidInput(err.to_string())
    } else {
        WebError::Network(err.to_string())
    }
}

fn body_error(err: reqwest::Error) -> WebError {
    if err.is_timeout() {
        WebError::Timeout(err.to_string())
    } else {
        WebError::Io(err.to_string())
    }
}
