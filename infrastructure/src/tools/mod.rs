//! Tools exposed to an agent host
//!
//! - `web`: handlers for `fetch_webpage` and `extract_content`
//! - [`WebScraperProvider`]: hands both tools to a host through `ToolProvider`
//! - [`ToolRegistry`]: reference host that routes calls to providers
//! - [`JsonSchemaToolConverter`]: tool definitions as JSON Schema

pub mod web;

mod provider;
mod registry;
mod schema;

pub use provider::{WEBSCRAPER_PROVIDER_ID, WebScraperProvider};
pub use registry::{RegistryStats, ToolRegistry};
pub use schema::JsonSchemaToolConverter;

use webscraper_domain::tool::entities::ToolSpec;

/// Create the tool specification with both web tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(web::fetch_webpage_definition())
        .register(web::extract_content_definition())
}
