//! Column definitions
//!
//! Columns A..G map positionally onto the seven item fields.

/// Number of columns in a full item row
pub const COLUMN_COUNT: usize = 7;

/// A column of the inventory tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Column {
    Name = 0,
    Description = 1,
    Band = 2,
    ModelNumber = 3,
    SerialNumber = 4,
    LastInspection = 5,
    Status = 6,
}

impl Column {
    /// All columns in positional order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Name,
        Column::Description,
        Column::Band,
        Column::ModelNumber,
        Column::SerialNumber,
        Column::LastInspection,
        Column::Status,
    ];

    /// Zero-based position within a row
    pub fn index(self) -> usize {
        self as usize
    }

    /// A1 column letter
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Column for a zero-based position, if any
    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable field label used in display cards
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Description => "Description",
            Column::Band => "Band",
            Column::ModelNumber => "Model Number",
            Column::SerialNumber => "Serial Number",
            Column::LastInspection => "Last INV",
            Column::Status => "Status",
        }
    }
}
