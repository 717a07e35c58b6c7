//! Mock upstream implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use reqwest::Method;

use crate::upstream::{MarketsApi, UpstreamResponse, UpstreamResult};

mock! {
    pub Upstream {}

    #[async_trait]
    impl MarketsApi for Upstream {
        async fn send(&self, method: Method, query: &str) -> UpstreamResult<UpstreamResponse>;
    }
}
