//! Search parameters accepted by the market search endpoint and the query
//! builder that turns them into an upstream query string.

use serde::{Deserialize, Serialize};

/// Number of markets requested when the caller does not choose a page size.
pub const DEFAULT_LIMIT: i64 = 12;

/// Filter and pagination input for a single market search.
///
/// Every filter is optional. `limit` and `offset` are always sent upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text search such as a city or county name.
    pub query: Option<String>,
    pub location_type: Option<String>,
    pub region: Option<String>,
    pub state_abbreviation: Option<String>,
    pub state_fips_code: Option<String>,
    /// Upstream market identifier.
    pub parcl_id: Option<i64>,
    /// Census geographic identifier.
    pub geoid: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl SearchParams {
    /// Creates parameters with no filters for the given page window.
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn location_type(mut self, location_type: impl Into<String>) -> Self {
        self.location_type = Some(location_type.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn state_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.state_abbreviation = Some(abbreviation.into());
        self
    }

    pub fn state_fips_code(mut self, code: impl Into<String>) -> Self {
        self.state_fips_code = Some(code.into());
        self
    }

    pub fn parcl_id(mut self, parcl_id: i64) -> Self {
        self.parcl_id = Some(parcl_id);
        self
    }

    pub fn geoid(mut self, geoid: impl Into<String>) -> Self {
        self.geoid = Some(geoid.into());
        self
    }

    pub fn sort(mut self, sort_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(sort_order.into());
        self
    }

    /// Returns the same filters moved to another page window.
    #[must_use]
    pub fn with_offset(&self, offset: i64) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    /// Serializes the parameters into an `application/x-www-form-urlencoded`
    /// query string. See [`build_query_string`].
    pub fn to_query_string(&self) -> String {
        build_query_string(self)
    }
}

/// Wire representation of [`SearchParams`]: blank filters are dropped.
#[derive(Serialize)]
struct WireQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_abbreviation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_fips_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parcl_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geoid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<&'a str>,
    limit: i64,
    offset: i64,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl<'a> From<&'a SearchParams> for WireQuery<'a> {
    fn from(params: &'a SearchParams) -> Self {
        Self {
            query: present(&params.query),
            location_type: present(&params.location_type),
            region: present(&params.region),
            state_abbreviation: present(&params.state_abbreviation),
            state_fips_code: present(&params.state_fips_code),
            parcl_id: params.parcl_id,
            geoid: present(&params.geoid),
            sort_by: present(&params.sort_by),
            sort_order: present(&params.sort_order),
            limit: params.limit,
            offset: params.offset,
        }
    }
}

/// Builds the upstream query string for `params`.
///
/// Only filters holding a non-empty value are emitted; `limit` and `offset`
/// are always present. Values are not range checked.
pub fn build_query_string(params: &SearchParams) -> String {
    // Strings, optional strings and integers always serialize.
    serde_html_form::to_string(WireQuery::from(params)).unwrap_or_default()
}
