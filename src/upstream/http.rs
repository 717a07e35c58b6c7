//! `reqwest` implementation of [`MarketsApi`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};

use crate::models::config::UpstreamConfig;
use crate::upstream::{MarketsApi, UpstreamError, UpstreamResponse, UpstreamResult};

/// HTTP client bound to one upstream search endpoint and credential.
#[derive(Clone, Debug)]
pub struct HttpMarketsApi {
    client: Client,
    base_url: String,
}

impl HttpMarketsApi {
    /// Builds the client from configuration.
    ///
    /// Fails when the API key is blank so that no request is ever sent
    /// without credentials.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(UpstreamError::MissingApiKey);
        }

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.query().is_some() {
            return Err(UpstreamError::InvalidUrl(format!(
                "{}: base url must not carry a query string",
                config.base_url
            )));
        }

        let mut authorization =
            HeaderValue::from_str(api_key).map_err(|_| UpstreamError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Upstream URL for an inbound query string.
    pub fn url_for(&self, query: &str) -> String {
        if query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, query)
        }
    }
}

#[async_trait]
impl MarketsApi for HttpMarketsApi {
    async fn send(&self, method: Method, query: &str) -> UpstreamResult<UpstreamResponse> {
        let url = self.url_for(query);
        log::debug!("Forwarding {method} {url}");

        let response = self.client.request(method, &url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
