//! Web domain module
//!
//! Value objects for the two stateless web operations:
//!
//! - **fetch**: [`FetchRequest`] → [`FetchResult`]
//! - **extract**: [`ExtractRequest`] → [`ExtractResult`]
//!
//! Both fail with a [`WebError`]. No entity outlives a single call.

pub mod error;
pub mod request;

pub use error::WebError;
pub use request::{DEFAULT_USER_AGENT, ExtractRequest, ExtractResult, FetchRequest, FetchResult};
