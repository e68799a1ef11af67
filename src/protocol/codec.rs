//! Protocol codec
//!
//! JSON encoding and decoding for the platform's HTTP interactions.
//!
//! ## Inbound
//! ```text
//! { "type": 2, "token": "..", "data": { "name": "check",
//!   "options": [ { "name": "name", "type": 3, "value": "Radio1" } ] } }
//! ```
//!
//! ## Outbound
//! - `{"type":1}` answers a PING
//! - `{"type":4,"data":{..}}` is an immediate message
//! - `{"type":5}` acknowledges a command whose reply follows as an edit

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{BridgeError, Result};

use super::{CommandRequest, Reply};

/// Message flag making a message visible only to the invoker
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

const PONG: u8 = 1;
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
const DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 5;

/// Interaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    Other(u8),
}

/// An inbound interaction (only the fields the bridge reads)
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub data: Option<InteractionData>,
}

/// Command payload of an application command interaction
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<InteractionOption>,
}

/// One supplied option
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionOption {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub value: Option<Value>,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        match self.kind {
            1 => InteractionKind::Ping,
            2 => InteractionKind::ApplicationCommand,
            other => InteractionKind::Other(other),
        }
    }

    /// Command name and options, if this is an application command
    ///
    /// Non-string option values are rendered as their JSON text; options
    /// without a value are dropped.
    pub fn command_request(&self) -> Option<CommandRequest> {
        let data = self.data.as_ref()?;
        let mut request = CommandRequest::new(&data.name);
        for option in &data.options {
            let value = match &option.value {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => continue,
                Some(other) => other.to_string(),
            };
            request.options.insert(option.name.clone(), value);
        }
        Some(request)
    }
}

/// Decode an interaction from the raw request body
pub fn decode_interaction(bytes: &[u8]) -> Result<Interaction> {
    serde_json::from_slice(bytes)
        .map_err(|e| BridgeError::Protocol(format!("malformed interaction: {}", e)))
}

/// Response to a PING
pub fn encode_pong() -> Value {
    json!({ "type": PONG })
}

/// Acknowledgment for a deferred command
pub fn encode_deferred() -> Value {
    json!({ "type": DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE })
}

/// Immediate message response
pub fn encode_reply(reply: &Reply) -> Value {
    let mut data = message_body(reply);
    if reply.is_ephemeral() {
        data["flags"] = json!(EPHEMERAL_FLAG);
    }
    json!({ "type": CHANNEL_MESSAGE_WITH_SOURCE, "data": data })
}

/// Body for editing the original (deferred) response
///
/// Visibility is fixed at acknowledgment time, so no flags are sent.
pub fn encode_edit(reply: &Reply) -> Value {
    message_body(reply)
}

fn message_body(reply: &Reply) -> Value {
    let embeds: Vec<Value> = reply
        .embed
        .iter()
        .map(|embed| json!(embed))
        .collect();
    json!({
        "content": reply.content.clone().unwrap_or_default(),
        "embeds": embeds,
        "allowed_mentions": { "parse": [] },
    })
}
