//! Telegram adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::ServiceError;
use crate::domain::entities::IncomingCommand;
use crate::domain::traits::Bot;

/// Telegram update as delivered to the webhook.
///
/// Only the fields the relay reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Convert into a command. `None` when the update carries no message.
    pub fn into_command(self) -> Option<IncomingCommand> {
        let message = self.message?;
        let command = IncomingCommand::new(message.chat.id, message.text.unwrap_or_default())
            .with_user(message.from.map(|u| u.id));
        Some(command)
    }
}

/// Telegram bot adapter
pub struct TelegramAdapter {
    token: String,
    base_url: String,
    client: Client,
}

impl TelegramAdapter {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Token prefix safe to log
    pub fn token_hint(&self) -> &str {
        self.token.get(..8.min(self.token.len())).unwrap_or_default()
    }
}

#[async_trait]
impl Bot for TelegramAdapter {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ServiceError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: i64,
            text: &'a str,
            parse_mode: &'a str,
        }

        tracing::debug!("Sending to {}: {}", chat_id, text);

        let request = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self.client
            .post(self.api_url("sendMessage"))
            .json(&request)
            .send()
            .await
            .map_err(ServiceError::network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api { status, body });
        }

        Ok(())
    }
}
