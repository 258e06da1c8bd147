//! ShrinkEarn link shortener

use async_trait::async_trait;
use reqwest::Client;

use crate::application::errors::ServiceError;
use crate::domain::traits::LinkShortener;

/// Schemes accepted for shortening
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// ShrinkEarn client using the plain-text API format
pub struct ShrinkEarnClient {
    api_token: String,
    base_url: String,
    client: Client,
}

impl ShrinkEarnClient {
    pub fn new(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn has_scheme(link: &str) -> bool {
        SCHEMES.iter().any(|scheme| link.starts_with(scheme))
    }
}

#[async_trait]
impl LinkShortener for ShrinkEarnClient {
    async fn shorten(&self, link: &str) -> Result<String, ServiceError> {
        if !Self::has_scheme(link) {
            return Err(ServiceError::InvalidInput(format!("not a URL: {}", link)));
        }

        let response = self.client
            .get(format!("{}/api", self.base_url))
            .query(&[("api", self.api_token.as_str()), ("url", link), ("format", "text")])
            .send()
            .await
            .map_err(ServiceError::network)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ServiceError::network)?;

        if !status.is_success() {
            return Err(ServiceError::Api { status: status.as_u16(), body });
        }

        let short = body.trim();
        if short.is_empty() {
            return Err(ServiceError::Parse("empty response".to_string()));
        }

        Ok(short.to_string())
    }
}
