//! Engine Module
//!
//! The command handlers: each composes the Row Codec and/or Key Lookup
//! with at most one read and at most one write against the backing store.
//!
//! ## Handlers
//! - **check**: read `A2:G`, first row whose Name matches, decode
//! - **create**: encode, append to `A:G` (no duplicate check)
//! - **change_status**: look up serial in `E2:E`, write Status cell
//! - **inventory**: look up serial in `E2:E`, write Last INV cell
//!
//! ## Concurrency
//! The engine holds no mutable state. Concurrent commands touching the
//! same row race at the backing store and the last write wins.

use std::sync::Arc;

use crate::error::Result;
use crate::outcome::{MissingKey, Outcome, Payload};
use crate::protocol::Command;
use crate::sheet::{self, CellRef, Column, ItemRecord, KeyLookup, RowNumber, SheetRange, Status};
use crate::storage::BackingStore;

/// Executes validated commands against one inventory tab
pub struct Engine {
    /// Backing store handle (shared, stateless)
    store: Arc<dyn BackingStore>,

    /// Inventory tab name
    tab: String,

    /// Serial-number resolution
    lookup: KeyLookup,
}

impl Engine {
    /// Create an engine over `tab` in `store`
    pub fn new(store: Arc<dyn BackingStore>, tab: impl Into<String>) -> Self {
        let tab = tab.into();
        Self {
            lookup: KeyLookup::new(Arc::clone(&store), tab.clone()),
            store,
            tab,
        }
    }

    /// Execute a command
    ///
    /// Backing-store errors are caught here, logged with the command and
    /// its arguments, and reported as `Outcome::Failure`.
    pub async fn execute(&self, command: &Command) -> Outcome {
        let result = match command {
            Command::Check { name } => self.check(name).await,
            Command::Create { record } => self.create(record).await,
            Command::ChangeStatus { serial, status } => self.change_status(serial, *status).await,
            Command::Inventory { serial, date } => self.record_inspection(serial, date).await,
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    command = command.command_type().name(),
                    arguments = ?command,
                    error = %e,
                    "Command handler failed"
                );
                Outcome::Failure(e.to_string())
            }
        }
    }

    /// Look up an item by name and return its decoded row
    pub async fn check(&self, name: &str) -> Result<Outcome> {
        let rows = self.store.read(&SheetRange::data(&self.tab)).await?;

        match sheet::position(&rows, Column::Name.index(), name) {
            Some(offset) => {
                tracing::debug!("Found {} at row {}", name, RowNumber::from_offset(offset));
                Ok(Outcome::Success(Payload::Record(sheet::decode(&rows[offset]))))
            }
            None => Ok(Outcome::NotFound(MissingKey::Name(name.to_string()))),
        }
    }

    /// Append a new item row
    pub async fn create(&self, record: &ItemRecord) -> Result<Outcome> {
        let row = sheet::encode(record);
        self.store.append(&SheetRange::table(&self.tab), &row).await?;

        tracing::info!("Created item {} (serial {})", record.name, record.serial_number);
        Ok(Outcome::Success(Payload::Created {
            name: record.name.clone(),
        }))
    }

    /// Set the Status of the item with `serial`
    pub async fn change_status(&self, serial: &str, status: Status) -> Result<Outcome> {
        let outcome = match self.update_by_serial(serial, Column::Status, status.as_str()).await? {
            Some(_) => Outcome::Success(Payload::StatusChanged {
                serial: serial.to_string(),
                status: status.as_str().to_string(),
            }),
            None => Outcome::NotFound(MissingKey::Serial(serial.to_string())),
        };
        Ok(outcome)
    }

    /// Set the Last INV date of the item with `serial`
    ///
    /// The date is written literally; no calendar parsing is done.
    pub async fn record_inspection(&self, serial: &str, date: &str) -> Result<Outcome> {
        let outcome = match self.update_by_serial(serial, Column::LastInspection, date).await? {
            Some(_) => Outcome::Success(Payload::InspectionRecorded {
                serial: serial.to_string(),
                date: date.to_string(),
            }),
            None => Outcome::NotFound(MissingKey::Serial(serial.to_string())),
        };
        Ok(outcome)
    }

    /// Resolve `serial` and overwrite one cell of its row
    ///
    /// Returns the row written, or `None` (and no write) when absent.
    async fn update_by_serial(
        &self,
        serial: &str,
        column: Column,
        value: &str,
    ) -> Result<Option<RowNumber>> {
        let Some(row) = self.lookup.find(Column::SerialNumber, serial).await? else {
            return Ok(None);
        };

        let cell = CellRef::new(&self.tab, column, row.get());
        self.store.write_cell(&cell, value).await?;

        tracing::info!("Set {} = {} for serial {}", cell, value, serial);
        Ok(Some(row))
    }

    /// Get the inventory tab name
    pub fn tab(&self) -> &str {
        &self.tab
    }
}
