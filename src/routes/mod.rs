//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use tera::{Context, Tera};

use crate::dto::search::{FormOptions, SearchPageData};

pub mod api;
pub mod main;

/// Renders `template` into an HTML response, or a 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(header::ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every rendering of the search page.
pub fn base_context(data: &SearchPageData) -> Context {
    let mut context = Context::new();
    context.insert("page", data);
    context.insert("options", &FormOptions::default());
    context
}
