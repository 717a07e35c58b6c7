//! Forwarding of inbound requests to the upstream search API.

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::services::{ServiceError, ServiceResult};
use crate::upstream::MarketsApi;

/// Relays one request upstream and returns the JSON body on success.
///
/// The body is returned byte for byte once it has been checked to be JSON.
/// Non-2xx statuses become [`ServiceError::UpstreamStatus`].
pub async fn forward<A>(api: &A, method: Method, query: &str) -> ServiceResult<Vec<u8>>
where
    A: MarketsApi + ?Sized,
{
    let response = api.send(method, query).await.map_err(|err| {
        log::error!("Upstream request failed: {err}");
        ServiceError::from(err)
    })?;

    if !response.is_success() {
        log::error!(
            "Upstream answered {} {}",
            response.status,
            response.status_text
        );
        return Err(ServiceError::UpstreamStatus(response.status_text));
    }

    serde_json::from_slice::<IgnoredAny>(&response.body).map_err(|err| {
        log::error!("Upstream body is not JSON: {err}");
        ServiceError::from(err)
    })?;

    Ok(response.body)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::upstream::mock::MockUpstream;
    use crate::upstream::{UpstreamError, UpstreamResponse};

    fn response(status: u16, status_text: &str, body: &str) -> UpstreamResponse {
        UpstreamResponse {
            status,
            status_text: status_text.to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[actix_web::test]
    async fn success_returns_body_verbatim() {
        let body = r#"{"items":[],"total":0,"limit":12,"offset":0}"#;
        let mut api = MockUpstream::new();
        api.expect_send()
            .withf(|method, query| *method == Method::GET && query == "limit=12&offset=0")
            .times(1)
            .returning(move |_, _| Ok(response(200, "OK", body)));

        let forwarded = forward(&api, Method::GET, "limit=12&offset=0").await.unwrap();

        assert_eq!(forwarded, body.as_bytes());
    }

    #[actix_web::test]
    async fn method_is_preserved() {
        let mut api = MockUpstream::new();
        api.expect_send()
            .withf(|method, _| *method == Method::POST)
            .times(1)
            .returning(|_, _| Ok(response(200, "OK", "{}")));

        assert!(forward(&api, Method::POST, "").await.is_ok());
    }

    #[actix_web::test]
    async fn non_success_status_is_an_error() {
        let mut api = MockUpstream::new();
        api.expect_send()
            .times(1)
            .returning(|_, _| Ok(response(404, "Not Found", r#"{"detail":"missing"}"#)));

        let err = forward(&api, Method::GET, "").await.unwrap_err();

        assert!(matches!(err, ServiceError::UpstreamStatus(_)));
        assert_eq!(err.message(), "Error fetching data: Not Found");
    }

    #[actix_web::test]
    async fn invalid_json_is_an_error() {
        let mut api = MockUpstream::new();
        api.expect_send()
            .times(1)
            .returning(|_, _| Ok(response(200, "OK", "<html>")));

        let err = forward(&api, Method::GET, "").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPayload(_)));
        assert!(!err.message().is_empty());
    }

    #[actix_web::test]
    async fn transport_failure_keeps_message() {
        let mut api = MockUpstream::new();
        api.expect_send()
            .times(1)
            .returning(|_, _| Err(UpstreamError::Transport("connection refused".into())));

        let err = forward(&api, Method::GET, "").await.unwrap_err();

        assert_eq!(err.message(), "connection refused");
    }

    #[actix_web::test]
    async fn blank_transport_failure_uses_unknown_error() {
        let mut api = MockUpstream::new();
        api.expect_send()
            .times(1)
            .returning(|_, _| Err(UpstreamError::Transport(String::new())));

        let err = forward(&api, Method::GET, "").await.unwrap_err();

        assert_eq!(err.message(), crate::services::UNKNOWN_ERROR);
    }
}
