//! In-memory backing store
//!
//! Holds tabs as plain row vectors (row 1 first) and reproduces the read
//! semantics of the Sheets API: trailing empty cells are trimmed and
//! trailing empty rows are omitted. Every write call is recorded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::error::{BridgeError, Result};
use crate::sheet::{CellRef, SheetRange};

use super::BackingStore;

/// A write call observed by [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Append { range: String, row: Vec<String> },
    Cell { cell: String, value: String },
}

/// Backing store kept entirely in process memory
#[derive(Default)]
pub struct MemoryStore {
    tabs: RwLock<HashMap<String, Vec<Vec<String>>>>,
    writes: Mutex<Vec<WriteOp>>,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    /// Create a store with no tabs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one tab holding a header row and `rows` below it
    pub fn with_data<R, S>(tab: &str, rows: &[R]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let store = Self::new();
        let mut contents = vec![crate::sheet::Column::ALL
            .iter()
            .map(|column| column.label().to_string())
            .collect::<Vec<_>>()];
        contents.extend(rows.iter().map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| cell.as_ref().to_string())
                .collect::<Vec<_>>()
        }));
        store.tabs.write().insert(tab.to_string(), contents);
        store
    }

    /// Create an empty tab (no header)
    pub fn add_tab(&self, tab: &str) {
        self.tabs.write().entry(tab.to_string()).or_default();
    }

    /// Full contents of a tab including the header row
    pub fn rows(&self, tab: &str) -> Vec<Vec<String>> {
        self.tabs.read().get(tab).cloned().unwrap_or_default()
    }

    /// Contents of one absolute (one-based) row
    pub fn row(&self, tab: &str, row: u32) -> Option<Vec<String>> {
        let index = (row as usize).checked_sub(1)?;
        self.tabs.read().get(tab)?.get(index).cloned()
    }

    /// Every write call so far, in order
    pub fn writes(&self) -> Vec<WriteOp> {
        self.writes.lock().clone()
    }

    /// Number of read calls so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Make every subsequent call fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::Relaxed) {
            Err(BridgeError::BackingStore("backing store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

fn unknown_tab(tab: &str) -> BridgeError {
    BridgeError::BackingStore(format!("Unable to parse range: {}", tab))
}

#[async_trait]
impl BackingStore for MemoryStore {
    async fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.check_available()?;

        let tabs = self.tabs.read();
        let contents = tabs.get(&range.tab).ok_or_else(|| unknown_tab(&range.tab))?;

        let first = range.first_row.unwrap_or(1).max(1) as usize - 1;
        let last = range
            .last_row
            .map(|row| row as usize)
            .unwrap_or(contents.len())
            .min(contents.len());
        let columns = range.first_column.index()..=range.last_column.index();

        let mut rows: Vec<Vec<String>> = contents
            .get(first..last.max(first))
            .unwrap_or_default()
            .iter()
            .map(|row| {
                let mut cells: Vec<String> = columns
                    .clone()
                    .map(|index| row.get(index).cloned().unwrap_or_default())
                    .collect();
                while cells.last().is_some_and(|cell| cell.is_empty()) {
                    cells.pop();
                }
                cells
            })
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Ok(rows)
    }

    async fn append(&self, range: &SheetRange, row: &[String]) -> Result<()> {
        self.check_available()?;

        let mut tabs = self.tabs.write();
        let contents = tabs.get_mut(&range.tab).ok_or_else(|| unknown_tab(&range.tab))?;

        // Appended after the last row that has any content
        while contents
            .last()
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_empty()))
        {
            contents.pop();
        }
        let mut cells = vec![String::new(); range.first_column.index()];
        cells.extend(row.iter().take(range.width()).cloned());
        contents.push(cells);

        self.writes.lock().push(WriteOp::Append {
            range: range.to_a1(),
            row: row.to_vec(),
        });
        Ok(())
    }

    async fn write_cell(&self, cell: &CellRef, value: &str) -> Result<()> {
        self.check_available()?;
        if cell.row == 0 {
            return Err(BridgeError::BackingStore(format!("invalid cell {}", cell)));
        }

        let mut tabs = self.tabs.write();
        let contents = tabs.get_mut(&cell.tab).ok_or_else(|| unknown_tab(&cell.tab))?;

        let row_index = cell.row as usize - 1;
        if contents.len() <= row_index {
            contents.resize(row_index + 1, Vec::new());
        }
        let row = &mut contents[row_index];
        let column_index = cell.column.index();
        if row.len() <= column_index {
            row.resize(column_index + 1, String::new());
        }
        row[column_index] = value.to_string();

        self.writes.lock().push(WriteOp::Cell {
            cell: cell.to_a1(),
            value: value.to_string(),
        });
        Ok(())
    }
}
