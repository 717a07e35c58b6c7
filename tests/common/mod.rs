//! Helpers shared by integration tests: an in-process stand-in for the
//! upstream search API.

use std::net::TcpListener;

use actix_web::http::header;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

use market_search::models::config::UpstreamConfig;
use market_search::upstream::HttpMarketsApi;

pub const API_KEY: &str = "test-api-key";

/// Body served verbatim by the `/raw` endpoint.
pub const RAW_BODY: &str = r#"{"total": 0,   "items": [], "z": {"b": 1, "a": 2}}"#;

fn header_value(req: &HttpRequest, name: header::HeaderName) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn stub(req: HttpRequest) -> HttpResponse {
    if header_value(&req, header::AUTHORIZATION) != API_KEY {
        return HttpResponse::Unauthorized().finish();
    }

    match req.path() {
        "/v1/search/markets" => HttpResponse::Ok().json(json!({
            "items": [{
                "parcl_id": 2900187,
                "country": "USA",
                "geoid": "36061",
                "state_fips_code": "36",
                "name": "New York County",
                "state_abbreviation": "NY",
                "region": "MIDDLE_ATLANTIC",
                "location_type": "COUNTY",
                "total_population": 1596273,
                "median_income": 99880,
                "parcl_exchange_market": 0,
                "pricefeed_market": 1,
                "case_shiller_10_market": 0,
                "case_shiller_20_market": 0
            }],
            "total": 13,
            "limit": 12,
            "offset": 0,
            "links": {
                "first": "first",
                "last": "last",
                "self": "self",
                "next": "next",
                "prev": null
            },
            "echo": {
                "method": req.method().as_str(),
                "query": req.query_string(),
                "accept": header_value(&req, header::ACCEPT),
            }
        })),
        "/raw" => HttpResponse::Ok()
            .content_type("application/json")
            .body(RAW_BODY),
        "/html" => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html></html>"),
        _ => HttpResponse::NotFound().body("no such endpoint"),
    }
}

/// Starts the stub upstream on an ephemeral port and returns its origin.
///
/// Must be called from within an actix runtime.
pub fn start_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub upstream");
    let port = listener.local_addr().expect("stub address").port();

    let server = HttpServer::new(|| App::new().default_service(web::to(stub)))
        .workers(1)
        .listen(listener)
        .expect("listen stub upstream")
        .run();
    actix_web::rt::spawn(server);

    format!("http://127.0.0.1:{port}")
}

/// Origin on which nothing listens.
pub fn unreachable_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("ephemeral address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn api_for(base_url: String) -> HttpMarketsApi {
    HttpMarketsApi::new(&UpstreamConfig {
        base_url,
        api_key: API_KEY.to_string(),
    })
    .expect("build upstream client")
}
