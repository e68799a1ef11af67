//! HTTP Server
//!
//! Serves the interactions endpoint until Ctrl+C.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::Result;

use super::discord::Followup;
use super::interaction::{handle_interaction, AppState};
use super::verify::SignatureVerifier;

/// HTTP server for the interactions endpoint
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create a new server
    ///
    /// Fails if the configured public key cannot be parsed.
    pub fn new(
        config: Config,
        dispatcher: Arc<Dispatcher>,
        followup: Arc<dyn Followup>,
    ) -> Result<Self> {
        let verifier = Arc::new(SignatureVerifier::from_hex(&config.public_key)?);
        Ok(Self {
            config,
            state: AppState {
                dispatcher,
                verifier,
                followup,
            },
        })
    }

    /// Build the router
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind and serve (until Ctrl+C)
    pub async fn run(&self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.config.listen_addr).await?;
        tracing::info!("Interactions endpoint listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Routes: `POST /interactions`, `GET /health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(handle_interaction))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
