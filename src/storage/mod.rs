//! Storage Module
//!
//! The backing store holding inventory rows.
//!
//! ## Responsibilities
//! - Read a rectangular range of cell values
//! - Append one full row after the last data row
//! - Overwrite a single cell by absolute address
//!
//! Implementations are stateless with respect to sheet contents: nothing
//! read is cached between calls. Every call is a single attempt.
//!
//! ## Implementations
//! - [`SheetsStore`]: Google Sheets v4 REST API, service-account auth
//! - [`MemoryStore`]: in-process tab used by tests and local runs

mod auth;
mod memory;
mod sheets;

use async_trait::async_trait;

use crate::error::Result;
use crate::sheet::{CellRef, SheetRange};

pub use auth::{ServiceAccountAuth, ServiceAccountKey, SHEETS_SCOPE};
pub use memory::{MemoryStore, WriteOp};
pub use sheets::SheetsStore;

/// Tabular backing store
///
/// Rows come back the way the Sheets API returns them: trailing empty
/// cells are trimmed and trailing empty rows are omitted, so callers
/// must index defensively.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Read every row in `range`
    async fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>>;

    /// Append `row` after the last row of the table at `range`
    async fn append(&self, range: &SheetRange, row: &[String]) -> Result<()>;

    /// Overwrite one cell
    async fn write_cell(&self, cell: &CellRef, value: &str) -> Result<()>;
}
