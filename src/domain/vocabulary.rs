//! Fixed option lists offered by the search form.

pub const LOCATION_TYPES: [&str; 8] = [
    "COUNTY", "CITY", "ZIP5", "CDP", "VILLAGE", "TOWN", "CBSA", "ALL",
];

/// US census divisions.
pub const REGIONS: [&str; 10] = [
    "EAST_NORTH_CENTRAL",
    "EAST_SOUTH_CENTRAL",
    "MIDDLE_ATLANTIC",
    "MOUNTAIN",
    "NEW_ENGLAND",
    "PACIFIC",
    "SOUTH_ATLANTIC",
    "WEST_NORTH_CENTRAL",
    "WEST_SOUTH_CENTRAL",
    "ALL",
];

pub const STATE_ABBREVIATIONS: [&str; 53] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
    "NM", "NV", "NY", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT",
    "WA", "WI", "WV", "WY", "ALL",
];

pub const STATE_FIPS_CODES: [&str; 53] = [
    "01", "02", "04", "05", "06", "08", "09", "10", "11", "12", "13", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33", "34", "35",
    "36", "37", "38", "39", "40", "41", "42", "44", "45", "46", "47", "48", "49", "50", "51", "53",
    "54", "55", "56", "72", "ALL",
];

/// Sort fields as `(wire value, label)`.
pub const SORT_FIELDS: [(&str, &str); 2] = [
    ("TOTAL_POPULATION", "Total Population"),
    ("PRICE_DROP", "Price Drop"),
];

/// Sort orders as `(wire value, label)`.
pub const SORT_ORDERS: [(&str, &str); 2] = [("ASC", "Ascending"), ("DESC", "Descending")];

/// Human label for an upper snake-case code, e.g. `SOUTH_ATLANTIC`.
pub fn label(code: &str) -> String {
    code.replace('_', " ")
}
