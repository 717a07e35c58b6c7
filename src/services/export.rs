//! CSV export of search results.

use csv::WriterBuilder;

use crate::domain::market::Item;
use crate::services::{ServiceError, ServiceResult};

/// File name offered to the browser for the export.
pub const EXPORT_FILE_NAME: &str = "markets.csv";

/// Writes `items` as CSV. The header row is always present, even when there
/// are no items; missing optional values become empty cells.
pub fn items_to_csv(items: &[Item]) -> ServiceResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(Item::COLUMNS)?;
    for item in items {
        writer.serialize(item)?;
    }

    writer
        .into_inner()
        .map_err(|err| ServiceError::Export(err.to_string()))
}
