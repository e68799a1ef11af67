//! Row Codec
//!
//! Converts between an [`ItemRecord`] and the ordered cell values of one
//! spreadsheet row. Pure and total.

use super::column::{Column, COLUMN_COUNT};
use super::record::ItemRecord;

/// Shown in place of an empty or absent cell
pub const PLACEHOLDER: &str = "—";

/// Encode a record as exactly seven cells in column order
pub fn encode(record: &ItemRecord) -> [String; COLUMN_COUNT] {
    Column::ALL.map(|column| record.field(column).to_string())
}

/// Decode up to seven cells into a record
///
/// The store trims trailing empty cells, so short rows are expected;
/// absent and empty cells become [`PLACEHOLDER`]. Cells past column G
/// are ignored.
pub fn decode<S: AsRef<str>>(cells: &[S]) -> ItemRecord {
    let mut record = ItemRecord::default();
    for column in Column::ALL {
        let value = cells
            .get(column.index())
            .map(|cell| cell.as_ref())
            .filter(|value| !value.is_empty())
            .unwrap_or(PLACEHOLDER);
        *record.field_mut(column) = value.to_string();
    }
    record
}
