//! Webhook HTTP server
//!
//! `POST /{bot_token}` receives Telegram updates, `GET /` is the health check.
//! The webhook always answers 200: results are reported to the sender via
//! chat, not via the HTTP response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::infrastructure::adapters::telegram::Update;

pub const HEALTH_TEXT: &str = "Bot is running.";

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    commands: Arc<CommandService>,
    bot_token: Arc<str>,
}

impl AppState {
    pub fn new(commands: CommandService, bot_token: impl Into<String>) -> Self {
        Self {
            commands: Arc::new(commands),
            bot_token: Arc::from(bot_token.into()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/{token}", post(webhook))
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_TEXT
}

async fn webhook(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Bytes,
) -> Response {
    if token != *state.bot_token {
        tracing::warn!("Webhook hit with unknown path token");
        return StatusCode::NOT_FOUND.into_response();
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!("Ignoring unparsable update: {}", e);
            return (StatusCode::OK, "").into_response();
        }
    };

    let Some(command) = update.into_command() else {
        tracing::debug!("Ignoring update without message");
        return (StatusCode::OK, "").into_response();
    };

    let outcome = state.commands.handle(command).await;
    let body = if outcome.reached_publish() { "ok" } else { "" };
    (StatusCode::OK, body).into_response()
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(state: AppState, addr: &str) -> Result<(), BotError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await
        .map_err(|e| BotError::Server(e.to_string()))
}
