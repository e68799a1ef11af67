//! Google Sheets backing store
//!
//! Thin client over the `spreadsheets.values` endpoints:
//! - `GET    v4/spreadsheets/{id}/values/{range}`
//! - `POST   v4/spreadsheets/{id}/values/{range}:append`
//! - `PUT    v4/spreadsheets/{id}/values/{range}`

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::sheet::{CellRef, SheetRange};

use super::auth::{ServiceAccountAuth, ServiceAccountKey};
use super::BackingStore;

/// Values are interpreted as if typed into the UI (dates stay dates)
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Background token refresh period, well inside the one-hour token lifetime
const TOKEN_REFRESH_INTERVAL: Duration = Duration::from_secs(45 * 60);

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Backing store talking to the Google Sheets API
pub struct SheetsStore {
    http: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    auth: ServiceAccountAuth,
}

impl SheetsStore {
    /// Build a store from configuration
    ///
    /// Loads and parses the service-account key so a bad credential
    /// fails here rather than on the first command.
    pub fn from_config(config: &Config) -> Result<Self> {
        let key = ServiceAccountKey::load(&config.credentials_path)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("inventory-bridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BridgeError::Config(format!("failed to create HTTP client: {}", e)))?;
        let auth = ServiceAccountAuth::new(http.clone(), key)?;

        tracing::info!(
            "Sheets store ready: spreadsheet {} as {}",
            config.spreadsheet_id,
            auth.client_email()
        );

        Ok(Self {
            http,
            api_base: config.sheets_api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            auth,
        })
    }

    /// Obtain an access token now, so the first command does not wait on it
    pub async fn warm_up(&self) -> Result<()> {
        self.auth.refresh().await?;
        Ok(())
    }

    /// Refresh the access token periodically so commands find it cached
    pub fn spawn_token_refresh(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TOKEN_REFRESH_INTERVAL);
            // First tick fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = store.auth.refresh().await {
                    tracing::warn!("Access token refresh failed: {}", e);
                }
            }
        })
    }

    /// URL of the values resource for an A1 range (plus optional `:verb`)
    fn values_url(&self, target: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| BridgeError::Config(format!("invalid Sheets API base: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| BridgeError::Config("Sheets API base cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", target]);
        Ok(url)
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
}

#[async_trait]
impl BackingStore for SheetsStore {
    async fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(&range.to_a1())?;
        let token = self.auth.access_token().await?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let body: ValueRange = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| BridgeError::Serialization(e.to_string()))?;

        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append(&self, range: &SheetRange, row: &[String]) -> Result<()> {
        let url = self.values_url(&format!("{}:append", range.to_a1()))?;
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .json(&json!({ "values": [row] }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn write_cell(&self, cell: &CellRef, value: &str) -> Result<()> {
        let a1 = cell.to_a1();
        let url = self.values_url(&a1)?;
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .json(&json!({ "range": a1, "majorDimension": "ROWS", "values": [[value]] }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Render a returned cell as text; formatted reads give strings already
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
