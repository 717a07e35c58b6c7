//! Access to the upstream market search API.

use async_trait::async_trait;
use reqwest::Method;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{UpstreamError, UpstreamResult};
pub use http::HttpMarketsApi;

/// Raw response received from the upstream API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Canonical reason phrase of `status`, empty when unknown.
    pub status_text: String,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the upstream search endpoint.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait MarketsApi: Send + Sync {
    /// Sends `method` to the search endpoint with `query` appended verbatim.
    async fn send(&self, method: Method, query: &str) -> UpstreamResult<UpstreamResponse>;
}
