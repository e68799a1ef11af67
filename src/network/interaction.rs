//! Interaction handler
//!
//! Handles one signed interaction request: verify, decode, dispatch.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;

use crate::dispatcher::Dispatcher;
use crate::protocol::{
    decode_interaction, encode_deferred, encode_pong, encode_reply, InteractionKind, ResponseStyle,
};

use super::discord::Followup;
use super::verify::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Shared per-server state; nothing in it is mutable
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub verifier: Arc<SignatureVerifier>,
    pub followup: Arc<dyn Followup>,
}

/// `POST /interactions`
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let (Some(signature), Some(timestamp)) = (header(SIGNATURE_HEADER), header(TIMESTAMP_HEADER))
    else {
        tracing::debug!("Rejected interaction without signature headers");
        return (StatusCode::UNAUTHORIZED, "missing request signature").into_response();
    };
    if let Err(e) = state.verifier.verify(signature, timestamp, &body) {
        tracing::warn!("Rejected interaction: {}", e);
        return (StatusCode::UNAUTHORIZED, "invalid request signature").into_response();
    }

    let interaction = match decode_interaction(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            tracing::warn!("{}", e);
            return (StatusCode::BAD_REQUEST, "malformed interaction").into_response();
        }
    };

    match interaction.kind() {
        InteractionKind::Ping => Json(encode_pong()).into_response(),
        InteractionKind::ApplicationCommand => {
            let Some(request) = interaction.command_request() else {
                return (StatusCode::BAD_REQUEST, "missing command data").into_response();
            };
            let Some(style) = state.dispatcher.response_style(&request.name) else {
                tracing::debug!("Ignoring unknown command {}", request.name);
                return StatusCode::NO_CONTENT.into_response();
            };

            tracing::trace!(
                "Interaction {:?} in guild {:?}: {}",
                interaction.id,
                interaction.guild_id,
                request.name
            );

            match style {
                ResponseStyle::Immediate => match state.dispatcher.handle(&request).await {
                    Some(reply) => Json(encode_reply(&reply)).into_response(),
                    None => StatusCode::NO_CONTENT.into_response(),
                },
                ResponseStyle::Deferred => {
                    let Some(token) = interaction.token.clone() else {
                        return (StatusCode::BAD_REQUEST, "missing interaction token")
                            .into_response();
                    };

                    tokio::spawn(async move {
                        let Some(reply) = state.dispatcher.handle(&request).await else {
                            return;
                        };
                        if let Err(e) = state.followup.edit_original(&token, &reply).await {
                            tracing::error!(
                                command = %request.name,
                                error = %e,
                                "Failed to deliver deferred reply"
                            );
                        }
                    });

                    Json(encode_deferred()).into_response()
                }
            }
        }
        InteractionKind::Other(kind) => {
            tracing::debug!("Ignoring interaction type {}", kind);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
