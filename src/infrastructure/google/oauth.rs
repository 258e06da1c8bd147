//! Google OAuth token source (refresh-token grant)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::ServiceError;
use crate::domain::traits::TokenSource;

/// Refresh-token grant form
#[derive(Serialize)]
struct RefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Exchanges the long-lived refresh token for an access token.
///
/// Holds no token state: every call performs a fresh exchange.
pub struct GoogleOAuthClient {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_url: String,
    client: Client,
}

impl GoogleOAuthClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            token_url: token_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TokenSource for GoogleOAuthClient {
    async fn access_token(&self) -> Result<String, ServiceError> {
        let form = RefreshRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            refresh_token: &self.refresh_token,
            grant_type: "refresh_token",
        };

        let response = self.client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(ServiceError::network)?;

        let status = response.status();
        let data: TokenResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(format!("status {}: {}", status, e.without_url())))?;

        match data.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                let reason = match (data.error, data.error_description) {
                    (Some(error), Some(desc)) => format!("{} ({})", error, desc),
                    (Some(error), None) => error,
                    _ => format!("status {}", status),
                };
                Err(ServiceError::MissingToken(reason))
            }
        }
    }
}
