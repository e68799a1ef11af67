//! Sheet Module
//!
//! Positional model of the inventory tab.
//!
//! ## Layout
//! ```text
//! ┌──────┬─────────────┬──────┬───────┬────────┬──────────┬────────┐
//! │  A   │      B      │  C   │   D   │   E    │    F     │   G    │
//! ├──────┼─────────────┼──────┼───────┼────────┼──────────┼────────┤
//! │ Name │ Description │ Band │ Model │ Serial │ Last INV │ Status │  row 1 (header)
//! ├──────┼─────────────┼──────┼───────┼────────┼──────────┼────────┤
//! │ ...  │     ...     │ ...  │  ...  │  ...   │   ...    │  ...   │  row 2.. (data)
//! └──────┴─────────────┴──────┴───────┴────────┴──────────┴────────┘
//! ```
//!
//! ## Responsibilities
//! - Column ↔ field mapping (fixed, positional)
//! - A1 addressing of data ranges and single cells
//! - Row Codec: record fields ↔ ordered cell values
//! - Key Lookup: first exact match of a key in a column

mod column;
mod range;
mod record;
mod row;
mod lookup;

pub use column::{Column, COLUMN_COUNT};
pub use range::{CellRef, SheetRange};
pub use record::{Band, ItemRecord, Status};
pub use row::{decode, encode, PLACEHOLDER};
pub use lookup::{position, KeyLookup, RowNumber};

/// Number of header rows at the top of the tab
pub const HEADER_ROWS: u32 = 1;

/// First absolute (one-based) row holding data
pub const DATA_START_ROW: u32 = HEADER_ROWS + 1;
