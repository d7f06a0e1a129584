//! Content extractor port

use webscraper_domain::web::{ExtractRequest, ExtractResult, WebError};

/// Port for extracting the visible text of an HTML document.
///
/// Extraction is CPU-only and synchronous; implementations hold no mutable
/// state and may be called from any thread.
pub trait ContentExtractorPort: Send + Sync {
    fn extract(&self, request: &ExtractRequest) -> Result<ExtractResult, WebError>;
}
