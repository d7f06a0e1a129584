//! Web adapters
//!
//! | Adapter | Port | Key Dependency |
//! |---------|------|----------------|
//! | [`ReqwestPageFetcher`] | `PageFetcherPort` | `reqwest` |
//! | [`HtmlContentExtractor`] | `ContentExtractorPort` | `scraper` |

mod extractor;
mod fetcher;

pub use extractor::{HtmlContentExtractor, extract_visible_text};
pub use fetcher::ReqwestPageFetcher;
