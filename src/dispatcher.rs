//! Dispatcher
//!
//! Resolves an inbound command to its handler and turns the outcome
//! into a user-facing reply.

use crate::engine::Engine;
use crate::outcome::{MissingKey, Outcome, Payload};
use crate::protocol::{Command, CommandRequest, CommandType, Embed, Reply, ResponseStyle};
use crate::sheet::Column;

/// The only failure text users ever see
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Routes command requests to the engine
pub struct Dispatcher {
    engine: Engine,
}

impl Dispatcher {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Reply style for a command name, or `None` if the name is unknown
    pub fn response_style(&self, name: &str) -> Option<ResponseStyle> {
        CommandType::from_name(name).map(CommandType::response_style)
    }

    /// Handle one request
    ///
    /// Unknown command names are ignored (`None`); everything else
    /// produces a reply.
    pub async fn handle(&self, request: &CommandRequest) -> Option<Reply> {
        let command = match Command::parse(request) {
            Ok(Some(command)) => command,
            Ok(None) => {
                tracing::debug!("Ignoring unknown command {}", request.name);
                return None;
            }
            Err(e) if e.is_validation() => {
                tracing::debug!("Rejected {}: {}", request.name, e);
                return Some(Reply::text(e.to_string()).ephemeral());
            }
            Err(e) => {
                tracing::error!(command = %request.name, error = %e, "Failed to parse command");
                return Some(Reply::text(GENERIC_FAILURE).ephemeral());
            }
        };

        tracing::debug!("Executing {:?}", command);
        let outcome = self.engine.execute(&command).await;
        Some(render(&outcome))
    }

    /// Get the engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Render an outcome as a reply
pub fn render(outcome: &Outcome) -> Reply {
    match outcome {
        Outcome::Success(Payload::Record(record)) => {
            let embed = Column::ALL
                .into_iter()
                .filter(|column| *column != Column::Name)
                .fold(
                    Embed::new(format!("Inventory: {}", record.name)),
                    |embed, column| embed.field(column.label(), record.field(column)),
                );
            Reply::card(embed)
        }
        Outcome::Success(Payload::Created { name }) => {
            Reply::text(format!("Created item `{}`.", name))
        }
        Outcome::Success(Payload::StatusChanged { serial, status }) => {
            Reply::text(format!("Status for `{}` set to **{}**.", serial, status))
        }
        Outcome::Success(Payload::InspectionRecorded { serial, date }) => {
            Reply::text(format!("Last INV for `{}` set to **{}**.", serial, date))
        }
        Outcome::NotFound(MissingKey::Name(name)) => {
            Reply::text(format!("No item named `{}`.", name)).ephemeral()
        }
        Outcome::NotFound(MissingKey::Serial(serial)) => {
            Reply::text(format!("No item with serial `{}`.", serial)).ephemeral()
        }
        Outcome::Failure(_) => Reply::text(GENERIC_FAILURE).ephemeral(),
    }
}
