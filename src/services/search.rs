use reqwest::Method;

use crate::domain::market::SearchResult;
use crate::domain::page::{Action, PageState, update};
use crate::domain::search::SearchParams;
use crate::services::{ServiceResult, proxy};
use crate::upstream::MarketsApi;

/// Runs one market search: builds the query string, forwards it upstream and
/// decodes the result.
pub async fn search_markets<A>(api: &A, params: &SearchParams) -> ServiceResult<SearchResult>
where
    A: MarketsApi + ?Sized,
{
    let query = params.to_query_string();
    let body = proxy::forward(api, Method::GET, &query).await?;
    let result: SearchResult = serde_json::from_slice(&body).map_err(|err| {
        log::error!("Unexpected search payload: {err}");
        err
    })?;
    Ok(result)
}

/// Drives the page state through one submit/settle cycle for `params`.
pub async fn load_search_page<A>(api: &A, state: PageState, params: SearchParams) -> PageState
where
    A: MarketsApi + ?Sized,
{
    let state = update(state, Action::Submit(params));
    if !state.is_pending() {
        return state;
    }
    let settled = search_markets(api, &state.params)
        .await
        .map_err(|err| err.message());
    update(state, Action::Settle(settled))
}
