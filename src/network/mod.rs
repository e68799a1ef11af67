//! Network Module
//!
//! HTTP interactions endpoint and platform REST client.
//!
//! ## Architecture
//! - axum router on a tokio runtime; one task per inbound interaction
//! - Every request is signature-checked before it is parsed
//! - Commands routed through the Dispatcher
//! - Deferred commands finish on a spawned task that edits the reply

mod verify;
mod discord;
mod interaction;
mod server;

pub use verify::{SignatureVerifier, DEFAULT_MAX_AGE, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use discord::{DiscordClient, Followup};
pub use interaction::{handle_interaction, AppState};
pub use server::{router, Server};
