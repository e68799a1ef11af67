//! Key Lookup
//!
//! Resolves a key value to the absolute row holding it.
//!
//! ## Matching rule
//! - Exact, case-sensitive string comparison (no trimming)
//! - First match in scan order wins; duplicates further down are ignored
//! - Rows shorter than the key column never match

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::storage::BackingStore;

use super::column::Column;
use super::range::SheetRange;
use super::DATA_START_ROW;

/// One-based absolute row number of a data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowNumber(u32);

impl RowNumber {
    /// Translate a zero-based offset within the data range
    pub fn from_offset(offset: usize) -> Self {
        RowNumber(offset as u32 + DATA_START_ROW)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based offset within the data range
    pub fn offset(self) -> usize {
        (self.0 - DATA_START_ROW) as usize
    }
}

impl fmt::Display for RowNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based offset of the first row whose cell at `index` equals `key`
///
/// `index` is relative to the first column of the rows passed in: 0 for
/// a single-column read, the column position for a full-row read.
pub fn position<R, S>(rows: &[R], index: usize, key: &str) -> Option<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .position(|row| row.as_ref().get(index).map(|cell| cell.as_ref()) == Some(key))
}

/// Key lookup against a backing store column
pub struct KeyLookup {
    store: Arc<dyn BackingStore>,
    tab: String,
}

impl KeyLookup {
    pub fn new(store: Arc<dyn BackingStore>, tab: impl Into<String>) -> Self {
        Self {
            store,
            tab: tab.into(),
        }
    }

    /// Find the row whose `column` cell equals `key`
    ///
    /// Issues exactly one read. Returns `Ok(None)` when the column is
    /// empty or nothing matches.
    pub async fn find(&self, column: Column, key: &str) -> Result<Option<RowNumber>> {
        let range = SheetRange::column(&self.tab, column);
        let rows = self.store.read(&range).await?;

        let found = position(&rows, 0, key).map(RowNumber::from_offset);
        tracing::trace!(
            "Key lookup {} in {}: {}",
            key,
            range,
            found.map_or_else(|| "no match".to_string(), |row| format!("row {}", row))
        );
        Ok(found)
    }
}
