//! # Webhook Handlers
//!
//! Handles incoming WhatsApp messages from Twilio and the informational
//! endpoints. Every webhook outcome, including a rejected signature, maps to
//! a user-visible TwiML body; the sender never sees a bare transport fault.

use crate::application::bot::Bot;
use crate::domain::traits::MessagingProvider;
use crate::lexicon::catalog;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const SIGNATURE_HEADER: &str = "X-Twilio-Signature";

#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<Bot>,
    pub transport: Arc<dyn MessagingProvider>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .with_state(state)
}

/// Incoming Twilio webhook form payload. Missing fields default to empty so
/// a malformed request still flows into the bot's empty-input handling.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
}

async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<WebhookPayload>,
) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    if !state.transport.validate_request(signature) {
        tracing::warn!("Rejected webhook without valid signature from {}", payload.from);
        return twiml(state.transport.wrap_reply(catalog::FALLBACK_REPLY));
    }

    tracing::info!("Received message from {}: {}", payload.from, payload.body);
    let reply = state.bot.process_message(&payload.body, &payload.from).await;
    tracing::info!("Sending response: {}", reply);

    twiml(state.transport.wrap_reply(&reply))
}

fn twiml(document: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], document).into_response()
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "bot": state.bot.identity(),
        "service": "parcero",
        "active_sessions": state.bot.sessions().active_count().await,
    }))
}

async fn home(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": format!("¡Hola! Soy {}, tu bot colombiano.", state.bot.identity().name),
        "endpoints": {
            "webhook": "/webhook (POST)",
            "health": "/health (GET)"
        },
        "instructions": "Configure your Twilio webhook to point to /webhook"
    }))
}
