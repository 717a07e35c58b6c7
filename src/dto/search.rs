//! DTOs shaped for the search page template.

use serde::Serialize;

use crate::domain::page::{Outcome, PageState};
use crate::forms::search::MAX_OFFSET;
use crate::domain::vocabulary::{
    LOCATION_TYPES, REGIONS, SORT_FIELDS, SORT_ORDERS, STATE_ABBREVIATIONS, STATE_FIPS_CODES,
    label,
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
}

/// Choices rendered in the form's select boxes.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub location_types: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
    pub state_abbreviations: Vec<SelectOption>,
    pub state_fips_codes: Vec<SelectOption>,
    pub sort_fields: Vec<SelectOption>,
    pub sort_orders: Vec<SelectOption>,
}

fn codes(values: &[&'static str]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|&value| SelectOption {
            value,
            label: label(value),
        })
        .collect()
}

fn labelled(values: &[(&'static str, &'static str)]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|&(value, label)| SelectOption {
            value,
            label: label.to_string(),
        })
        .collect()
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            location_types: codes(&LOCATION_TYPES),
            regions: codes(&REGIONS),
            state_abbreviations: codes(&STATE_ABBREVIATIONS),
            state_fips_codes: codes(&STATE_FIPS_CODES),
            sort_fields: labelled(&SORT_FIELDS),
            sort_orders: labelled(&SORT_ORDERS),
        }
    }
}

/// Data required to render the search page.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    pub state: PageState,
    /// Validation message for a rejected submission.
    pub form_error: Option<String>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub export_url: Option<String>,
    /// Tab links once a search has settled; plain anchors otherwise.
    pub search_tab_url: Option<String>,
    pub results_tab_url: Option<String>,
}

impl SearchPageData {
    pub fn new(state: PageState) -> Self {
        let (prev_url, next_url, export_url) = match &state.outcome {
            Outcome::Loaded(result) => (
                result
                    .prev_offset()
                    .and_then(|offset| search_url(&state, offset)),
                result
                    .next_offset()
                    .and_then(|offset| search_url(&state, offset)),
                Some(format!("/export.csv?{}", state.params.to_query_string())),
            ),
            _ => (None, None, None),
        };
        let (search_tab_url, results_tab_url) = match &state.outcome {
            Outcome::Loaded(_) | Outcome::Failed => {
                let query = state.params.to_query_string();
                (
                    Some(format!("/search?{query}&tab=search")),
                    Some(format!("/search?{query}&tab=results")),
                )
            }
            _ => (None, None),
        };

        Self {
            state,
            form_error: None,
            prev_url,
            next_url,
            export_url,
            search_tab_url,
            results_tab_url,
        }
    }

    pub fn with_form_error(state: PageState, message: impl Into<String>) -> Self {
        Self {
            form_error: Some(message.into()),
            ..Self::new(state)
        }
    }
}

/// Link to another page of the same search. Offsets the form would reject
/// get no link.
fn search_url(state: &PageState, offset: i64) -> Option<String> {
    (0..=MAX_OFFSET).contains(&offset).then(|| {
        format!("/search?{}", state.params.with_offset(offset).to_query_string())
    })
}
