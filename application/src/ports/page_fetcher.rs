//! Page fetcher port
//!
//! Defines the interface for fetching a single web page over HTTP.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use webscraper_domain::web::{FetchRequest, FetchResult, WebError};

/// Port for fetching a web page
///
/// Implementations issue exactly one GET per call, with no caching and no
/// retries. A status other than 200 is a [`WebError::Remote`].
///
/// Cancelling `cancellation` aborts the in-flight request and yields
/// [`WebError::Cancelled`]; the connection is released on every exit path.
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    async fn fetch(
        &self,
        request: &FetchRequest,
        cancellation: &CancellationToken,
    ) -> Result<FetchResult, WebError>;
}
