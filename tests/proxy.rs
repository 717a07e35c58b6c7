use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use market_search::routes::api::api_proxy;
use market_search::upstream::HttpMarketsApi;

mod common;

async fn call(api: HttpMarketsApi, req: test::TestRequest) -> (StatusCode, web::Bytes) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(api))
            .service(web::scope("/api").service(api_proxy)),
    )
    .await;
    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    (status, test::read_body(resp).await)
}

fn error_of(body: &[u8]) -> String {
    let value: Value = serde_json::from_slice(body).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn forwards_query_and_credentials() {
    let origin = common::start_upstream();
    let api = common::api_for(format!("{origin}/v1/search/markets"));

    let (status, body) = call(
        api,
        test::TestRequest::get().uri("/api/proxy?query=New+York&limit=12&offset=0"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["echo"]["method"], "GET");
    assert_eq!(value["echo"]["query"], "query=New+York&limit=12&offset=0");
    assert_eq!(value["echo"]["accept"], "application/json");
    assert_eq!(value["items"][0]["name"], "New York County");
}

#[actix_web::test]
async fn success_body_is_relayed_byte_for_byte() {
    let origin = common::start_upstream();
    let api = common::api_for(format!("{origin}/raw"));

    let (status, body) = call(api, test::TestRequest::get().uri("/api/proxy")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::RAW_BODY.as_bytes());
}

#[actix_web::test]
async fn inbound_method_is_reused() {
    let origin = common::start_upstream();
    let api = common::api_for(format!("{origin}/v1/search/markets"));

    let (status, body) = call(api, test::TestRequest::post().uri("/api/proxy?limit=1&offset=0")).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["echo"]["method"], "POST");
}

#[actix_web::test]
async fn upstream_not_found_becomes_internal_error() {
    let origin = common::start_upstream();
    let api = common::api_for(format!("{origin}/missing"));

    let (status, body) = call(api, test::TestRequest::get().uri("/api/proxy?limit=12&offset=0")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(&body), "Error fetching data: Not Found");
}

#[actix_web::test]
async fn non_json_success_becomes_internal_error() {
    let origin = common::start_upstream();
    let api = common::api_for(format!("{origin}/html"));

    let (status, body) = call(api, test::TestRequest::get().uri("/api/proxy")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!error_of(&body).is_empty());
}

#[actix_web::test]
async fn unreachable_upstream_reports_transport_failure() {
    let api = common::api_for(format!("{}/v1/search/markets", common::unreachable_origin()));

    let (status, body) = call(api, test::TestRequest::get().uri("/api/proxy?limit=12&offset=0")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = error_of(&body);
    assert!(!error.is_empty());
    assert_ne!(error, "An unknown error occurred");
}
