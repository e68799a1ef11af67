//! # Inventory Bridge
//!
//! A command-driven bridge between a chat platform and a spreadsheet
//! used as an inventory database:
//! - Slash commands arrive as signed HTTP interactions
//! - Each command becomes one read and at most one write on a single tab
//! - Outcomes are rendered back as chat replies (immediate or deferred)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                HTTP Interactions Endpoint                    │
//! │          (signature check, one task per event)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Dispatcher                              │
//! │        (name → handler, outcome → reply rendering)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Engine (handlers)                          │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   ┌─────────────────┐           ┌───────────────────┐
//!   │ Row Codec /     │           │   BackingStore    │
//!   │ Key Lookup      │──────────►│ (Sheets / memory) │
//!   └─────────────────┘           └───────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod sheet;
pub mod storage;
pub mod outcome;
pub mod engine;
pub mod protocol;
pub mod dispatcher;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BridgeError, Result};
pub use config::Config;
pub use engine::Engine;
pub use dispatcher::Dispatcher;
pub use outcome::Outcome;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the bridge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
