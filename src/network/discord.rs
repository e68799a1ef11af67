//! Platform REST client
//!
//! Two calls are needed:
//! - `PUT  applications/{app}/guilds/{guild}/commands` (bulk overwrite)
//! - `PATCH webhooks/{app}/{token}/messages/@original` (deferred reply)

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::protocol::{definitions, encode_edit, Reply};

/// Delivers the final content of a deferred reply
#[async_trait]
pub trait Followup: Send + Sync {
    /// Replace the original (acknowledged) response of interaction `token`
    async fn edit_original(&self, token: &str, reply: &Reply) -> Result<()>;
}

/// REST client for the chat platform
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
    application_id: String,
    bot_token: String,
}

impl DiscordClient {
    pub fn new(
        api_base: impl Into<String>,
        application_id: impl Into<String>,
        bot_token: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                "DiscordBot (inventory-bridge, ",
                env!("CARGO_PKG_VERSION"),
                ")"
            ))
            .build()
            .map_err(|e| BridgeError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            application_id: application_id.into(),
            bot_token: bot_token.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.discord_api_base,
            &config.application_id,
            &config.discord_token,
        )
    }

    /// Overwrite the guild's command set; returns how many were registered
    pub async fn register_commands(&self, guild_id: &str) -> Result<usize> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands",
            self.api_base, self.application_id, guild_id
        );
        let commands = definitions();

        let response = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bot {}", self.bot_token))
            .json(&commands)
            .send()
            .await?;
        check(response).await?;

        Ok(commands.len())
    }
}

#[async_trait]
impl Followup for DiscordClient {
    async fn edit_original(&self, token: &str, reply: &Reply) -> Result<()> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.api_base, self.application_id, token
        );

        let response = self.http.patch(&url).json(&encode_edit(reply)).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BridgeError::Http {
        status: status.as_u16(),
        body,
    })
}
