//! Market records returned by the upstream search API.

use serde::{Deserialize, Serialize};

/// One geographic market.
///
/// Field order matches the CSV export columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub parcl_id: i64,
    pub country: String,
    pub geoid: String,
    pub state_fips_code: Option<String>,
    pub name: String,
    pub state_abbreviation: Option<String>,
    pub region: Option<String>,
    pub location_type: String,
    pub total_population: Option<i64>,
    pub median_income: Option<i64>,
    /// Membership flags, `1` when the market belongs to the index.
    pub parcl_exchange_market: i32,
    pub pricefeed_market: i32,
    pub case_shiller_10_market: i32,
    pub case_shiller_20_market: i32,
}

impl Item {
    /// Column names in serialization order.
    pub const COLUMNS: [&'static str; 14] = [
        "parcl_id",
        "country",
        "geoid",
        "state_fips_code",
        "name",
        "state_abbreviation",
        "region",
        "location_type",
        "total_population",
        "median_income",
        "parcl_exchange_market",
        "pricefeed_market",
        "case_shiller_10_market",
        "case_shiller_20_market",
    ];
}

/// Navigation links between pages of a search result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub first: String,
    pub last: String,
    #[serde(rename = "self")]
    pub self_link: String,
    /// Absent on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// Absent on the first page.
    #[serde(default)]
    pub prev: Option<String>,
}

/// A page of markets plus pagination metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<Item>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub links: Links,
}

impl SearchResult {
    /// Offset of the following page, if the upstream advertised one.
    pub fn next_offset(&self) -> Option<i64> {
        self.links.next.as_ref().map(|_| self.offset + self.limit)
    }

    /// Offset of the preceding page, if the upstream advertised one.
    pub fn prev_offset(&self) -> Option<i64> {
        self.links
            .prev
            .as_ref()
            .map(|_| (self.offset - self.limit).max(0))
    }
}
