//! The market search form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::page::Tab;
use crate::domain::search::{DEFAULT_LIMIT, SearchParams};
use crate::domain::vocabulary::{
    LOCATION_TYPES, REGIONS, SORT_FIELDS, SORT_ORDERS, STATE_ABBREVIATIONS, STATE_FIPS_CODES,
};
use crate::forms::FormError;

/// Largest page size the form accepts.
pub const MAX_LIMIT: i64 = 1000;
/// Largest offset the form accepts.
pub const MAX_OFFSET: i64 = 1000;

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw search form submission. Field names match the upstream query keys.
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub state_abbreviation: String,
    #[serde(default)]
    pub state_fips_code: String,
    /// Blank submits decode as `None`.
    #[serde(default)]
    pub parcl_id: Option<i64>,
    #[serde(default)]
    pub geoid: String,
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub sort_order: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0, max = 1000))]
    pub offset: Option<i64>,
    /// Tab to show once the search settles.
    #[serde(default)]
    pub tab: Option<Tab>,
}

impl SearchForm {
    /// Decodes a form from a URL query string.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|e| FormError::Decode(e.to_string()))
    }

    /// The submitted values as parameters, without validation, so a rejected
    /// form can be shown again as typed.
    pub fn echo(&self) -> SearchParams {
        SearchParams {
            query: optional(self.query.clone()),
            location_type: optional(self.location_type.clone()),
            region: optional(self.region.clone()),
            state_abbreviation: optional(self.state_abbreviation.clone()),
            state_fips_code: optional(self.state_fips_code.clone()),
            parcl_id: self.parcl_id,
            geoid: optional(self.geoid.clone()),
            sort_by: optional(self.sort_by.clone()),
            sort_order: optional(self.sort_order.clone()),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// Maps empty input to `None`. Anything else is kept as typed.
fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Like [`optional`], but the value must be one of `allowed`.
fn choice<'a>(
    field: &'static str,
    value: String,
    allowed: impl IntoIterator<Item = &'a str>,
) -> Result<Option<String>, FormError> {
    match optional(value) {
        Some(value) if !allowed.into_iter().any(|a| a == value) => {
            Err(FormError::UnknownOption { field, value })
        }
        value => Ok(value),
    }
}

impl TryFrom<SearchForm> for SearchParams {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            query: optional(form.query),
            location_type: choice("location type", form.location_type, LOCATION_TYPES)?,
            region: choice("region", form.region, REGIONS)?,
            state_abbreviation: choice(
                "state abbreviation",
                form.state_abbreviation,
                STATE_ABBREVIATIONS,
            )?,
            state_fips_code: choice("state FIPS code", form.state_fips_code, STATE_FIPS_CODES)?,
            parcl_id: form.parcl_id,
            geoid: optional(form.geoid),
            sort_by: choice("sort field", form.sort_by, SORT_FIELDS.map(|(v, _)| v))?,
            sort_order: choice("sort order", form.sort_order, SORT_ORDERS.map(|(v, _)| v))?,
            limit: form.limit.unwrap_or(DEFAULT_LIMIT),
            offset: form.offset.unwrap_or(0),
        })
    }
}
