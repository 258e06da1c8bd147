//! Builds the production object graph from a validated Config

use std::sync::Arc;

use crate::application::errors::ConfigError;
use crate::application::services::{CommandService, PublishService};
use crate::infrastructure::adapters::telegram::TelegramAdapter;
use crate::infrastructure::adapters::webhook::AppState;
use crate::infrastructure::config::Config;
use crate::infrastructure::google::{BloggerClient, GoogleOAuthClient};
use crate::infrastructure::omdb::OmdbClient;
use crate::infrastructure::shrinkearn::ShrinkEarnClient;

pub fn command_service(config: &Config) -> Result<CommandService, ConfigError> {
    let creds = &config.credentials;
    let endpoints = &config.endpoints;

    let bot = TelegramAdapter::new(&creds.telegram_token, &endpoints.telegram);
    tracing::info!("Telegram bot (token: {}...)", bot.token_hint());

    let publisher = PublishService::new(
        Arc::new(GoogleOAuthClient::new(
            &creds.blogger_client_id,
            &creds.blogger_client_secret,
            &creds.blogger_refresh_token,
            &endpoints.oauth_token,
        )),
        Arc::new(BloggerClient::new(&creds.blog_id, &endpoints.blogger)),
    );

    let service = CommandService::new(
        Arc::new(bot),
        Arc::new(OmdbClient::new(&creds.omdb_api_key, &endpoints.omdb)),
        Arc::new(ShrinkEarnClient::new(&creds.shrink_api_token, &endpoints.shrink)),
        publisher,
        config.admin_id()?,
    )
    .with_remark(&config.bot.remark);

    Ok(service)
}

pub fn app_state(config: &Config) -> Result<AppState, ConfigError> {
    Ok(AppState::new(command_service(config)?, &config.credentials.telegram_token))
}
