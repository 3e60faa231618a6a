//! # Fetch Layer
//!
//! The [`Fetcher`] trait is the only place network access enters the crate.
//! Commands are generic over it, so they can be exercised without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpFetcher`]: Production fetcher
//!   - One blocking GET per call, no retries
//!   - Sends `Accept: application/json` and the configured `User-Agent`
//!   - Returns the body whatever the HTTP status; decoding decides what it means
//!
//! - [`memory::StaticFetcher`]: Canned responses for testing
//!   - Serves the same body for every url
//!   - Records each requested url so tests can count and inspect requests

use crate::error::Result;

pub mod http;
pub mod memory;

pub trait Fetcher {
    /// GET `url` and return the full response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
