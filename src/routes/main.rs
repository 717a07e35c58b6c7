use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::domain::page::{Action, PageState, update};
use crate::domain::search::SearchParams;
use crate::dto::api::ErrorBody;
use crate::dto::search::SearchPageData;
use crate::forms::FormError;
use crate::forms::search::SearchForm;
use crate::routes::{base_context, render_template};
use crate::services::export::{EXPORT_FILE_NAME, items_to_csv};
use crate::services::search::{load_search_page, search_markets};
use crate::services::{ServiceError, ServiceResult};
use crate::upstream::HttpMarketsApi;

fn parse_search(req: &HttpRequest) -> Result<SearchParams, FormError> {
    SearchForm::from_query(req.query_string()).and_then(SearchParams::try_from)
}

#[get("/")]
/// Show the empty search form.
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let data = SearchPageData::new(PageState::default());
    render_template(&tera, "main/index.html", &base_context(&data))
}

#[get("/search")]
/// Run the submitted search and show the results tab.
pub async fn search(
    req: HttpRequest,
    api: web::Data<HttpMarketsApi>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match SearchForm::from_query(req.query_string()) {
        Ok(form) => form,
        Err(err) => return rejected(&tera, PageState::default(), &err),
    };
    let tab = form.tab;
    let echo = form.echo();

    let mut state = match SearchParams::try_from(form) {
        Ok(params) => load_search_page(api.get_ref(), PageState::default(), params).await,
        Err(err) => return rejected(&tera, PageState::with_params(echo), &err),
    };
    if let Some(tab) = tab {
        state = update(state, Action::SelectTab(tab));
    }

    let data = SearchPageData::new(state);
    render_template(&tera, "main/index.html", &base_context(&data))
}

fn rejected(tera: &Tera, state: PageState, err: &FormError) -> HttpResponse {
    log::warn!("Rejected search form: {err}");
    let data = SearchPageData::with_form_error(state, err.to_string());

    render_template(&tera, "main/index.html", &base_context(&data))
}

async fn export(req: &HttpRequest, api: &HttpMarketsApi) -> ServiceResult<Vec<u8>> {
    let params = parse_search(req)?;
    let result = search_markets(api, &params).await?;
    items_to_csv(&result.items)
}

#[get("/export.csv")]
/// Download the items of the submitted search as CSV.
pub async fn export_csv(req: HttpRequest, api: web::Data<HttpMarketsApi>) -> impl Responder {
    match export(&req, api.get_ref()).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
            })
            .body(csv),
        Err(err @ ServiceError::Form(_)) => {
            HttpResponse::BadRequest().json(ErrorBody::from(&err))
        }
        Err(err) => {
            log::error!("Failed to export search results: {err}");
            HttpResponse::InternalServerError().json(ErrorBody::from(&err))
        }
    }
}
