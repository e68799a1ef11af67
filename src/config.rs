//! Configuration for the inventory bridge
//!
//! Centralized configuration with sensible defaults for everything that
//! is not a credential or an identifier. Credentials and identifiers are
//! required and checked up front by [`Config::from_env`], limited to
//! what the caller's [`Scope`] needs.

use std::path::PathBuf;

use crate::error::{BridgeError, Result};

/// Environment variable names
pub mod env {
    pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
    pub const CLIENT_ID: &str = "CLIENT_ID";
    pub const GUILD_ID: &str = "GUILD_ID";
    pub const DISCORD_PUBLIC_KEY: &str = "DISCORD_PUBLIC_KEY";
    pub const SHEET_ID: &str = "SHEET_ID";
    pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
    pub const SHEET_TAB: &str = "SHEET_TAB";
    pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
    pub const DISCORD_API_BASE: &str = "DISCORD_API_BASE";
    pub const SHEETS_API_BASE: &str = "SHEETS_API_BASE";
    pub const REGISTER_COMMANDS: &str = "REGISTER_COMMANDS";
}

/// Main configuration for a bridge instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Chat Platform Configuration
    // -------------------------------------------------------------------------
    /// Bot token used for REST calls (command registration)
    pub discord_token: String,

    /// Application identifier
    pub application_id: String,

    /// Guild the commands are registered in
    pub guild_id: String,

    /// Hex-encoded Ed25519 public key for inbound interaction signatures
    pub public_key: String,

    /// Base URL of the platform REST API
    pub discord_api_base: String,

    /// Register the command set on startup
    pub register_commands: bool,

    // -------------------------------------------------------------------------
    // Backing Store Configuration
    // -------------------------------------------------------------------------
    /// Spreadsheet identifier
    pub spreadsheet_id: String,

    /// Tab holding the inventory (columns A..G, header on row 1)
    pub sheet_tab: String,

    /// Path to the service-account JSON key
    pub credentials_path: PathBuf,

    /// Base URL of the Sheets API
    pub sheets_api_base: String,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address for the interactions endpoint
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: String::new(),
            application_id: String::new(),
            guild_id: String::new(),
            public_key: String::new(),
            discord_api_base: "https://discord.com/api/v10".to_string(),
            register_commands: true,
            spreadsheet_id: String::new(),
            sheet_tab: "Main".to_string(),
            credentials_path: PathBuf::new(),
            sheets_api_base: "https://sheets.googleapis.com".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which settings a caller needs
///
/// The server needs everything. The operator CLI only needs the
/// backing store for inventory commands, and only the platform
/// credentials for command registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Server,
    Sheets,
    Registration,
}

impl Scope {
    fn needs_sheets(self) -> bool {
        matches!(self, Scope::Server | Scope::Sheets)
    }

    fn needs_platform(self) -> bool {
        matches!(self, Scope::Server | Scope::Registration)
    }

    fn needs_public_key(self) -> bool {
        self == Scope::Server
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load the full server configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_scoped(Scope::Server)
    }

    /// Load the settings `scope` needs from the process environment
    pub fn from_env_scoped(scope: Scope) -> Result<Self> {
        Self::from_lookup_scoped(|key| std::env::var(key).ok(), scope)
    }

    /// Load the full server configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_scoped(lookup, Scope::Server)
    }

    /// Load the settings `scope` needs through an arbitrary key lookup
    ///
    /// Blank values count as unset. Every missing required variable is
    /// reported in a single error.
    pub fn from_lookup_scoped<F>(lookup: F, scope: Scope) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut setting = |key: &'static str, required: bool| match get(key) {
            Some(value) => value,
            None => {
                if required {
                    missing.push(key);
                }
                String::new()
            }
        };

        let discord_token = setting(env::DISCORD_TOKEN, scope.needs_platform());
        let application_id = setting(env::CLIENT_ID, scope.needs_platform());
        let guild_id = setting(env::GUILD_ID, scope.needs_platform());
        let public_key = setting(env::DISCORD_PUBLIC_KEY, scope.needs_public_key());
        let spreadsheet_id = setting(env::SHEET_ID, scope.needs_sheets());
        let credentials_path = setting(env::GOOGLE_APPLICATION_CREDENTIALS, scope.needs_sheets());

        if !missing.is_empty() {
            return Err(BridgeError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let mut builder = Config::builder()
            .discord_token(discord_token)
            .application_id(application_id)
            .guild_id(guild_id)
            .public_key(public_key)
            .spreadsheet_id(spreadsheet_id)
            .credentials_path(credentials_path);

        if let Some(tab) = get(env::SHEET_TAB) {
            builder = builder.sheet_tab(tab);
        }
        if let Some(addr) = get(env::LISTEN_ADDR) {
            builder = builder.listen_addr(addr);
        }
        if let Some(base) = get(env::DISCORD_API_BASE) {
            builder = builder.discord_api_base(base);
        }
        if let Some(base) = get(env::SHEETS_API_BASE) {
            builder = builder.sheets_api_base(base);
        }
        if let Some(flag) = get(env::REGISTER_COMMANDS) {
            builder = builder.register_commands(parse_flag(env::REGISTER_COMMANDS, &flag)?);
        }

        let config = builder.build();
        config.validate_scoped(scope)?;
        Ok(config)
    }

    /// Check that every setting the server needs is present
    pub fn validate(&self) -> Result<()> {
        self.validate_scoped(Scope::Server)
    }

    /// Check that every setting `scope` needs is present
    pub fn validate_scoped(&self, scope: Scope) -> Result<()> {
        let settings = [
            (env::DISCORD_TOKEN, self.discord_token.as_str(), scope.needs_platform()),
            (env::CLIENT_ID, self.application_id.as_str(), scope.needs_platform()),
            (env::GUILD_ID, self.guild_id.as_str(), scope.needs_platform()),
            (env::DISCORD_API_BASE, self.discord_api_base.as_str(), scope.needs_platform()),
            (env::DISCORD_PUBLIC_KEY, self.public_key.as_str(), scope.needs_public_key()),
            (env::SHEET_ID, self.spreadsheet_id.as_str(), scope.needs_sheets()),
            (env::SHEET_TAB, self.sheet_tab.as_str(), scope.needs_sheets()),
            (env::SHEETS_API_BASE, self.sheets_api_base.as_str(), scope.needs_sheets()),
        ];

        let mut missing: Vec<&str> = settings
            .iter()
            .filter(|(_, value, needed)| *needed && value.trim().is_empty())
            .map(|(key, _, _)| *key)
            .collect();
        if scope.needs_sheets() && self.credentials_path.as_os_str().is_empty() {
            missing.push(env::GOOGLE_APPLICATION_CREDENTIALS);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::Config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )))
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BridgeError::Config(format!(
            "{} must be a boolean, got `{}`",
            key, other
        ))),
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the bot token
    pub fn discord_token(mut self, token: impl Into<String>) -> Self {
        self.config.discord_token = token.into();
        self
    }

    /// Set the application identifier
    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.config.application_id = id.into();
        self
    }

    /// Set the guild the commands are scoped to
    pub fn guild_id(mut self, id: impl Into<String>) -> Self {
        self.config.guild_id = id.into();
        self
    }

    /// Set the interaction verification key (hex)
    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.config.public_key = key.into();
        self
    }

    /// Set the platform REST base URL
    pub fn discord_api_base(mut self, base: impl Into<String>) -> Self {
        self.config.discord_api_base = base.into();
        self
    }

    /// Enable or disable command registration on startup
    pub fn register_commands(mut self, enabled: bool) -> Self {
        self.config.register_commands = enabled;
        self
    }

    /// Set the spreadsheet identifier
    pub fn spreadsheet_id(mut self, id: impl Into<String>) -> Self {
        self.config.spreadsheet_id = id.into();
        self
    }

    /// Set the inventory tab name
    pub fn sheet_tab(mut self, tab: impl Into<String>) -> Self {
        self.config.sheet_tab = tab.into();
        self
    }

    /// Set the service-account key path
    pub fn credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.credentials_path = path.into();
        self
    }

    /// Set the Sheets API base URL
    pub fn sheets_api_base(mut self, base: impl Into<String>) -> Self {
        self.config.sheets_api_base = base.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
