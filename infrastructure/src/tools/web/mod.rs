//! **Web Tools**: `fetch_webpage` and `extract_content`
//!
//! | Tool | Description | Key Dependency |
//! |------|-------------|----------------|
//! | `fetch_webpage` | GET a URL, return the body when the status is 200 | `reqwest` |
//! | `extract_content` | Visible text of `<body>`, script/style removed | `scraper` |
//!
//! The two tools are independent: `fetch_webpage` returns raw HTML and never
//! extracts, `extract_content` never fetches. A host chains them if it wants
//! page text.

mod extract;
mod fetch;

pub use extract::{EXTRACT_CONTENT, execute_extract_content, extract_content_definition};
pub use fetch::{FETCH_WEBPAGE, execute_fetch_webpage, fetch_webpage_definition};
