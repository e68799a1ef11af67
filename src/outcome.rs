//! Command outcomes
//!
//! What a handler reports back to the dispatcher. Internal error detail
//! lives only in `Failure` and is never rendered to the user.

use crate::sheet::ItemRecord;

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Payload),
    NotFound(MissingKey),
    /// Diagnostic for logs only
    Failure(String),
}

/// Successful result content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A decoded row to display
    Record(ItemRecord),

    /// A row was appended
    Created { name: String },

    /// The Status cell of the row with this serial was overwritten
    StatusChanged { serial: String, status: String },

    /// The Last INV cell of the row with this serial was overwritten
    InspectionRecorded { serial: String, date: String },
}

/// The key that matched no row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingKey {
    Name(String),
    Serial(String),
}

impl MissingKey {
    pub fn value(&self) -> &str {
        match self {
            MissingKey::Name(key) | MissingKey::Serial(key) => key,
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}
