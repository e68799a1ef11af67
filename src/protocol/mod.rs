//! Protocol Module
//!
//! Defines the command surface and the platform wire format.
//!
//! ## Commands
//! | Name            | Options                                                   | Reply     |
//! |-----------------|-----------------------------------------------------------|-----------|
//! | `check`         | `name`                                                    | immediate |
//! | `create`        | `name` `description` `band` `model` `serial` `last_inv` `status` | immediate |
//! | `change_status` | `serial` `status`                                         | immediate |
//! | `inventory`     | `serial` `date`                                           | deferred  |
//!
//! ## Interaction Flow
//! ```text
//! POST /interactions ──► PING ───────────────► {"type":1}
//!                    ├─► command (immediate) ─► {"type":4,"data":{..}}
//!                    └─► command (deferred) ──► {"type":5}
//!                                                  └─► PATCH .../messages/@original
//! ```

mod command;
mod response;
mod codec;

pub use command::{
    definitions, option, Command, CommandDefinition, CommandRequest, CommandType, OptionChoice,
    OptionDefinition, ResponseStyle,
};
pub use response::{Embed, EmbedField, Reply, Visibility};
pub use codec::{
    decode_interaction, encode_deferred, encode_edit, encode_pong, encode_reply, Interaction,
    InteractionData, InteractionKind, InteractionOption, EPHEMERAL_FLAG,
};
