//! Use cases
//!
//! Application-level operations that orchestrate the ports.

pub mod scrape_page;
