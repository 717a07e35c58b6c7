use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, route, web};
use reqwest::Method;

use crate::dto::api::ErrorBody;
use crate::services::proxy;
use crate::upstream::HttpMarketsApi;

#[route(
    "/proxy",
    method = "GET",
    method = "POST",
    method = "PUT",
    method = "PATCH",
    method = "DELETE"
)]
/// Relay the request's method and query string to the upstream search API.
pub async fn api_proxy(req: HttpRequest, api: web::Data<HttpMarketsApi>) -> impl Responder {
    let method = match Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(err) => {
            log::error!("Unsupported method {}: {err}", req.method());
            return HttpResponse::InternalServerError().json(ErrorBody {
                error: err.to_string(),
            });
        }
    };

    match proxy::forward(api.get_ref(), method, req.query_string()).await {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(err) => HttpResponse::InternalServerError().json(ErrorBody::from(&err)),
    }
}
