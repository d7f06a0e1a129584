//! `scraper`-backed content extractor
//!
//! Parsing goes through html5ever, which follows the HTML5 tree-construction
//! algorithm: malformed markup is repaired the way a browser would repair it
//! and never rejected. Unclosed tags are closed, stray end tags dropped, and
//! a missing `<html>`/`<head>`/`<body>` is synthesized. A document that ends
//! inside a tag (`"<not even html"`) loses that tag, so its text is empty.
//! The same input always yields the same output.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::trace;
use webscraper_application::ports::content_extractor::ContentExtractorPort;
use webscraper_domain::web::{ExtractRequest, ExtractResult, WebError};

/// Elements whose whole subtree is excluded from the extracted text
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Extracts the visible text of an HTML document's `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlContentExtractor;

impl HtmlContentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractorPort for HtmlContentExtractor {
    fn extract(&self, request: &ExtractRequest) -> Result<ExtractResult, WebError> {
        extract_visible_text(&request.html).map(ExtractResult::new)
    }
}

/// Concatenate the text nodes under every `<body>` in document order,
/// skipping `script`/`style` subtrees, then trim the outer whitespace.
///
/// Internal whitespace is preserved as-is. A document without a body yields
/// an empty string.
pub fn extract_visible_text(html: &str) -> Result<String, WebError> {
    let body_selector =
        Selector::parse("body").map_err(|e| WebError::Parse(format!("body selector: {}", e)))?;

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        trace!(
            recovered = document.errors.len(),
            "HTML parser recovered from malformed markup"
        );
    }

    let mut content = String::new();
    for body in document.select(&body_selector) {
        append_text(body, &mut content);
    }

    Ok(content.trim().to_string())
}

fn append_text(root: ElementRef<'_>, out: &mut String) {
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| SKIPPED_ELEMENTS.contains(&el.value().name()));
        if !hidden {
            out.push_str(text);
        }
    }
}
