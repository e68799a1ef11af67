//! Inventory Bridge CLI
//!
//! Runs inventory commands directly against the configured spreadsheet,
//! without going through the chat platform.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use inventory_bridge::config::Scope;
use inventory_bridge::network::DiscordClient;
use inventory_bridge::protocol::{option, CommandRequest, CommandType};
use inventory_bridge::storage::SheetsStore;
use inventory_bridge::{Config, Dispatcher, Engine, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Inventory Bridge CLI
///
/// Configuration is read from the same environment variables as the server;
/// inventory commands only need the spreadsheet settings and `register`
/// only needs the platform credentials.
#[derive(Parser, Debug)]
#[command(name = "inventory-bridge-cli")]
#[command(about = "CLI for the spreadsheet-backed inventory")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up an item by name
    Check {
        /// Item name (column A)
        name: String,
    },

    /// Add a new item
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// 7/800, UHF, VHF or All
        #[arg(long)]
        band: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        serial: String,
        /// Last inspection date (MM/DD/YYYY)
        #[arg(long)]
        last_inv: String,
        #[arg(long)]
        status: String,
    },

    /// Change the status of an item by serial number
    ChangeStatus {
        serial: String,
        status: String,
    },

    /// Set the last inspection date of an item by serial number
    Inventory {
        serial: String,
        date: String,
    },

    /// Register the slash commands in the configured guild
    Register,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    if let Err(e) = run(args.command).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    let request = match command {
        Commands::Register => {
            let config = Config::from_env_scoped(Scope::Registration)?;
            let client = DiscordClient::from_config(&config)?;
            let count = client.register_commands(&config.guild_id).await?;
            println!("Registered {} commands in guild {}", count, config.guild_id);
            return Ok(());
        }
        Commands::Check { name } => {
            CommandRequest::new(CommandType::Check.name()).option(option::NAME, name)
        }
        Commands::Create {
            name,
            description,
            band,
            model,
            serial,
            last_inv,
            status,
        } => CommandRequest::new(CommandType::Create.name())
            .option(option::NAME, name)
            .option(option::DESCRIPTION, description)
            .option(option::BAND, band)
            .option(option::MODEL, model)
            .option(option::SERIAL, serial)
            .option(option::LAST_INV, last_inv)
            .option(option::STATUS, status),
        Commands::ChangeStatus { serial, status } => {
            CommandRequest::new(CommandType::ChangeStatus.name())
                .option(option::SERIAL, serial)
                .option(option::STATUS, status)
        }
        Commands::Inventory { serial, date } => CommandRequest::new(CommandType::Inventory.name())
            .option(option::SERIAL, serial)
            .option(option::DATE, date),
    };

    let config = Config::from_env_scoped(Scope::Sheets)?;
    let store = Arc::new(SheetsStore::from_config(&config)?);
    let dispatcher = Dispatcher::new(Engine::new(store, config.sheet_tab.clone()));
    if let Some(reply) = dispatcher.handle(&request).await {
        println!("{}", reply.to_plain_text());
    }
    Ok(())
}
