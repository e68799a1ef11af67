//! A1 addressing
//!
//! Typed ranges over the inventory tab. Backing stores receive these
//! instead of raw strings so that test doubles can interpret them
//! without an A1 parser; the remote store renders them with [`SheetRange::to_a1`].

use std::fmt;

use super::column::Column;
use super::DATA_START_ROW;

/// A rectangular range, open-ended downward when `last_row` is `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    pub tab: String,
    pub first_column: Column,
    pub last_column: Column,
    /// One-based first row; `None` means the whole column
    pub first_row: Option<u32>,
    /// One-based last row (inclusive); `None` means unbounded
    pub last_row: Option<u32>,
}

impl SheetRange {
    /// Every data row across all columns (`Tab!A2:G`)
    pub fn data(tab: &str) -> Self {
        Self {
            tab: tab.to_string(),
            first_column: Column::Name,
            last_column: Column::Status,
            first_row: Some(DATA_START_ROW),
            last_row: None,
        }
    }

    /// Every data row of a single column (`Tab!E2:E`)
    pub fn column(tab: &str, column: Column) -> Self {
        Self {
            tab: tab.to_string(),
            first_column: column,
            last_column: column,
            first_row: Some(DATA_START_ROW),
            last_row: None,
        }
    }

    /// Whole-table range used as the append target (`Tab!A:G`)
    pub fn table(tab: &str) -> Self {
        Self {
            tab: tab.to_string(),
            first_column: Column::Name,
            last_column: Column::Status,
            first_row: None,
            last_row: None,
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.last_column.index() - self.first_column.index() + 1
    }

    /// Render in A1 notation
    pub fn to_a1(&self) -> String {
        let start = match self.first_row {
            Some(row) => format!("{}{}", self.first_column.letter(), row),
            None => self.first_column.letter().to_string(),
        };
        let end = match (self.first_row, self.last_row) {
            (Some(_), Some(row)) => format!("{}{}", self.last_column.letter(), row),
            _ => self.last_column.letter().to_string(),
        };
        format!("{}!{}:{}", quote_tab(&self.tab), start, end)
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// A single cell addressed by absolute row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub tab: String,
    pub column: Column,
    /// One-based absolute row
    pub row: u32,
}

impl CellRef {
    pub fn new(tab: &str, column: Column, row: u32) -> Self {
        Self {
            tab: tab.to_string(),
            column,
            row,
        }
    }

    /// Render in A1 notation (`Tab!G5`)
    pub fn to_a1(&self) -> String {
        format!("{}!{}{}", quote_tab(&self.tab), self.column.letter(), self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Quote a tab name for A1 notation when it is not a plain identifier
///
/// Embedded single quotes are doubled.
pub(crate) fn quote_tab(tab: &str) -> String {
    let plain = !tab.is_empty()
        && !tab.starts_with(|c: char| c.is_ascii_digit())
        && tab.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        tab.to_string()
    } else {
        format!("'{}'", tab.replace('\'', "''"))
    }
}
