//! Item record and enumerated field values

use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

use super::column::Column;

/// One inventory item, field order matching columns A..G
///
/// Field values are kept as stored strings: rows written by hand in the
/// spreadsheet are not required to use the enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    pub band: String,
    pub model_number: String,
    pub serial_number: String,
    pub last_inspection: String,
    pub status: String,
}

impl ItemRecord {
    /// Value of the field stored in `column`
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Description => &self.description,
            Column::Band => &self.band,
            Column::ModelNumber => &self.model_number,
            Column::SerialNumber => &self.serial_number,
            Column::LastInspection => &self.last_inspection,
            Column::Status => &self.status,
        }
    }

    /// Mutable access to the field stored in `column`
    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Name => &mut self.name,
            Column::Description => &mut self.description,
            Column::Band => &mut self.band,
            Column::ModelNumber => &mut self.model_number,
            Column::SerialNumber => &mut self.serial_number,
            Column::LastInspection => &mut self.last_inspection,
            Column::Status => &mut self.status,
        }
    }
}

/// Radio band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    SevenEightHundred,
    Uhf,
    Vhf,
    All,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::SevenEightHundred, Band::Uhf, Band::Vhf, Band::All];

    /// Stored cell value
    pub fn as_str(self) -> &'static str {
        match self {
            Band::SevenEightHundred => "7/800",
            Band::Uhf => "UHF",
            Band::Vhf => "VHF",
            Band::All => "All",
        }
    }
}

impl FromStr for Band {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Band::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| BridgeError::Validation(format!("Invalid band `{}`.", s)))
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InService,
    Broken,
    Sold,
    NotInUse,
    OutOfService,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::InService,
        Status::Broken,
        Status::Sold,
        Status::NotInUse,
        Status::OutOfService,
    ];

    /// Stored cell value (must match exactly)
    pub fn as_str(self) -> &'static str {
        match self {
            Status::InService => "In Service",
            Status::Broken => "Broken",
            Status::Sold => "Sold (Remove)",
            Status::NotInUse => "Not in use (acc only)",
            Status::OutOfService => "Out Of Service",
        }
    }

    /// Short label shown in the command picker
    pub fn choice_name(self) -> &'static str {
        match self {
            Status::Sold => "Sold",
            Status::NotInUse => "Not in use",
            other => other.as_str(),
        }
    }
}

impl FromStr for Status {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BridgeError::Validation(format!("Invalid status `{}`.", s)))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
