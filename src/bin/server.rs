//! Inventory Bridge Server Binary
//!
//! Registers the slash commands and serves the interactions endpoint.

use std::sync::Arc;

use clap::Parser;
use inventory_bridge::config::env;
use inventory_bridge::network::{DiscordClient, Server};
use inventory_bridge::storage::SheetsStore;
use inventory_bridge::{Config, Dispatcher, Engine, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Inventory Bridge Server
///
/// Every option falls back to its environment variable; the merged
/// values go through the same loading rules as [`Config::from_env`].
#[derive(Parser, Debug)]
#[command(name = "inventory-bridge-server")]
#[command(about = "Chat command bridge for a spreadsheet-backed inventory")]
#[command(version)]
struct Args {
    /// Bot token
    #[arg(long, env = env::DISCORD_TOKEN, hide_env_values = true)]
    discord_token: Option<String>,

    /// Application identifier
    #[arg(long, env = env::CLIENT_ID)]
    client_id: Option<String>,

    /// Guild the commands are registered in
    #[arg(long, env = env::GUILD_ID)]
    guild_id: Option<String>,

    /// Hex-encoded interaction verification key
    #[arg(long, env = env::DISCORD_PUBLIC_KEY)]
    public_key: Option<String>,

    /// Spreadsheet identifier
    #[arg(long, env = env::SHEET_ID)]
    sheet_id: Option<String>,

    /// Service-account JSON key
    #[arg(long, env = env::GOOGLE_APPLICATION_CREDENTIALS)]
    credentials: Option<String>,

    /// Inventory tab name [default: Main]
    #[arg(long, env = env::SHEET_TAB)]
    tab: Option<String>,

    /// Listen address (host:port) [default: 0.0.0.0:8080]
    #[arg(short, long, env = env::LISTEN_ADDR)]
    listen: Option<String>,

    /// Platform REST base URL
    #[arg(long, env = env::DISCORD_API_BASE)]
    discord_api_base: Option<String>,

    /// Sheets API base URL
    #[arg(long, env = env::SHEETS_API_BASE)]
    sheets_api_base: Option<String>,

    /// Register the slash commands on startup (true/false) [default: true]
    #[arg(long, env = env::REGISTER_COMMANDS)]
    register_commands: Option<String>,

    /// Skip command registration on startup
    #[arg(long)]
    no_register: bool,
}

impl Args {
    /// Value given for an environment variable, by flag or by environment
    fn lookup(&self, key: &str) -> Option<String> {
        let value = match key {
            env::DISCORD_TOKEN => &self.discord_token,
            env::CLIENT_ID => &self.client_id,
            env::GUILD_ID => &self.guild_id,
            env::DISCORD_PUBLIC_KEY => &self.public_key,
            env::SHEET_ID => &self.sheet_id,
            env::GOOGLE_APPLICATION_CREDENTIALS => &self.credentials,
            env::SHEET_TAB => &self.tab,
            env::LISTEN_ADDR => &self.listen,
            env::DISCORD_API_BASE => &self.discord_api_base,
            env::SHEETS_API_BASE => &self.sheets_api_base,
            env::REGISTER_COMMANDS => &self.register_commands,
            _ => return None,
        };
        value.clone()
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory_bridge=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Inventory Bridge Server v{}", inventory_bridge::VERSION);

    if let Err(e) = run(args).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::from_lookup(|key| args.lookup(key))?;
    if args.no_register {
        config.register_commands = false;
    }

    tracing::info!("Spreadsheet: {} (tab {})", config.spreadsheet_id, config.sheet_tab);

    // Everything that can be misconfigured is constructed before binding
    let store = Arc::new(SheetsStore::from_config(&config)?);
    let discord = Arc::new(DiscordClient::from_config(&config)?);

    let dispatcher = Arc::new(Dispatcher::new(Engine::new(
        store.clone(),
        config.sheet_tab.clone(),
    )));
    let server = Server::new(config.clone(), dispatcher, discord.clone())?;

    // The first command should not pay for the token exchange
    store.warm_up().await?;
    store.spawn_token_refresh();

    if config.register_commands {
        tracing::info!("Registering slash commands...");
        match discord.register_commands(&config.guild_id).await {
            Ok(count) => tracing::info!("Registered {} slash commands", count),
            Err(e) => tracing::error!("Registration failed: {}", e),
        }
    }

    server.run().await
}
