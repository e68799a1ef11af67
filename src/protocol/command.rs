//! Command definitions
//!
//! Represents commands from users, both as raw named options and as
//! validated, typed operations.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{BridgeError, Result};
use crate::sheet::{Band, ItemRecord, Status};

/// Option names as registered with the platform
pub mod option {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const BAND: &str = "band";
    pub const MODEL: &str = "model";
    pub const SERIAL: &str = "serial";
    pub const LAST_INV: &str = "last_inv";
    pub const STATUS: &str = "status";
    pub const DATE: &str = "date";
}

/// How the platform should be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStyle {
    /// Reply once with the final content
    Immediate,

    /// Acknowledge now, edit the acknowledgment with the final content later
    Deferred,
}

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Check,
    Create,
    ChangeStatus,
    Inventory,
}

impl CommandType {
    pub const ALL: [CommandType; 4] = [
        CommandType::Check,
        CommandType::Create,
        CommandType::ChangeStatus,
        CommandType::Inventory,
    ];

    /// Registered command name
    pub fn name(self) -> &'static str {
        match self {
            CommandType::Check => "check",
            CommandType::Create => "create",
            CommandType::ChangeStatus => "change_status",
            CommandType::Inventory => "inventory",
        }
    }

    /// Resolve a command name; `lookup` is accepted as an alias of `check`
    pub fn from_name(name: &str) -> Option<CommandType> {
        match name {
            "lookup" => Some(CommandType::Check),
            _ => Self::ALL.into_iter().find(|ty| ty.name() == name),
        }
    }

    /// Reply style, chosen by how many backing-store round trips the command makes
    pub fn response_style(self) -> ResponseStyle {
        match self {
            CommandType::Inventory => ResponseStyle::Deferred,
            _ => ResponseStyle::Immediate,
        }
    }
}

/// A command as delivered: name plus string options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    pub name: String,
    pub options: HashMap<String, String>,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: HashMap::new(),
        }
    }

    /// Add an option (builder style)
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Value of a required option; absent or blank is a validation error
    pub fn required(&self, name: &str) -> Result<&str> {
        self.options
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| BridgeError::Validation(format!("Missing required option `{}`.", name)))
    }
}

/// A validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up and display an item by name
    Check { name: String },

    /// Append a new item row
    Create { record: ItemRecord },

    /// Set the status of the item with this serial number
    ChangeStatus { serial: String, status: Status },

    /// Set the last inspection date of the item with this serial number
    Inventory { serial: String, date: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Check { .. } => CommandType::Check,
            Command::Create { .. } => CommandType::Create,
            Command::ChangeStatus { .. } => CommandType::ChangeStatus,
            Command::Inventory { .. } => CommandType::Inventory,
        }
    }

    /// Validate a request into a typed command
    ///
    /// Returns `Ok(None)` for names that are not registered commands.
    pub fn parse(request: &CommandRequest) -> Result<Option<Command>> {
        let Some(ty) = CommandType::from_name(&request.name) else {
            return Ok(None);
        };

        let command = match ty {
            CommandType::Check => Command::Check {
                name: request.required(option::NAME)?.to_string(),
            },
            CommandType::Create => {
                let band: Band = request.required(option::BAND)?.parse()?;
                let status: Status = request.required(option::STATUS)?.parse()?;
                Command::Create {
                    record: ItemRecord {
                        name: request.required(option::NAME)?.to_string(),
                        description: request.required(option::DESCRIPTION)?.to_string(),
                        band: band.as_str().to_string(),
                        model_number: request.required(option::MODEL)?.to_string(),
                        serial_number: request.required(option::SERIAL)?.to_string(),
                        last_inspection: request.required(option::LAST_INV)?.to_string(),
                        status: status.as_str().to_string(),
                    },
                }
            }
            CommandType::ChangeStatus => Command::ChangeStatus {
                serial: request.required(option::SERIAL)?.to_string(),
                status: request.required(option::STATUS)?.parse()?,
            },
            CommandType::Inventory => Command::Inventory {
                serial: request.required(option::SERIAL)?.to_string(),
                date: request.required(option::DATE)?.to_string(),
            },
        };
        Ok(Some(command))
    }
}

// =============================================================================
// Registration Payload
// =============================================================================

/// Platform option type for string options
const STRING_OPTION: u8 = 3;

/// Platform command type for slash commands
const CHAT_INPUT: u8 = 1;

/// A command as registered with the platform
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub options: Vec<OptionDefinition>,
}

/// A string option of a registered command
#[derive(Debug, Clone, Serialize)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
}

/// A fixed choice offered for an option
#[derive(Debug, Clone, Serialize)]
pub struct OptionChoice {
    pub name: &'static str,
    pub value: &'static str,
}

fn string_option(name: &'static str, description: &'static str) -> OptionDefinition {
    OptionDefinition {
        name,
        description,
        kind: STRING_OPTION,
        required: true,
        choices: Vec::new(),
    }
}

fn band_choices() -> Vec<OptionChoice> {
    Band::ALL
        .into_iter()
        .map(|band| OptionChoice {
            name: band.as_str(),
            value: band.as_str(),
        })
        .collect()
}

fn status_choices() -> Vec<OptionChoice> {
    Status::ALL
        .into_iter()
        .map(|status| OptionChoice {
            name: status.choice_name(),
            value: status.as_str(),
        })
        .collect()
}

/// The full command set, in registration order
pub fn definitions() -> Vec<CommandDefinition> {
    CommandType::ALL.into_iter().map(definition).collect()
}

fn definition(ty: CommandType) -> CommandDefinition {
    let (description, options) = match ty {
        CommandType::Check => (
            "Look up an item by name (col A)",
            vec![string_option(option::NAME, "Name of the item")],
        ),
        CommandType::Create => (
            "Add a new inventory item (cols A–G)",
            vec![
                string_option(option::NAME, "Name (A)"),
                string_option(option::DESCRIPTION, "Description (B)"),
                OptionDefinition {
                    choices: band_choices(),
                    ..string_option(option::BAND, "Band (C)")
                },
                string_option(option::MODEL, "Model Number (D)"),
                string_option(option::SERIAL, "Serial Number (E)"),
                string_option(option::LAST_INV, "Last INV date (MM/DD/YYYY) (F)"),
                OptionDefinition {
                    choices: status_choices(),
                    ..string_option(option::STATUS, "Status (G)")
                },
            ],
        ),
        CommandType::ChangeStatus => (
            "Change status by serial number (col E→G)",
            vec![
                string_option(option::SERIAL, "Serial Number of the item"),
                OptionDefinition {
                    choices: status_choices(),
                    ..string_option(option::STATUS, "New status")
                },
            ],
        ),
        CommandType::Inventory => (
            "Set Last INV date for an item (col F)",
            vec![
                string_option(option::SERIAL, "Serial Number of the item"),
                string_option(option::DATE, "Last INV date (MM/DD/YYYY)"),
            ],
        ),
    };

    CommandDefinition {
        name: ty.name(),
        description,
        kind: CHAT_INPUT,
        options,
    }
}
