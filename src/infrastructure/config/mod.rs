//! Configuration management
//!
//! Settings come from an optional YAML file, then the environment. Secrets
//! normally live only in the environment; the file is for endpoints and the
//! bind address.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::errors::ConfigError;

/// Relay configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub endpoints: EndpointsConfig,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    /// Remark line stamped on every article
    pub remark: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub bind: String,
}

/// Base URLs of the external services
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EndpointsConfig {
    pub telegram: String,
    pub omdb: String,
    pub shrink: String,
    pub oauth_token: String,
    pub blogger: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CredentialsConfig {
    pub telegram_token: String,
    pub omdb_api_key: String,
    pub shrink_api_token: String,
    pub blogger_client_id: String,
    pub blogger_client_secret: String,
    pub blogger_refresh_token: String,
    pub blog_id: String,
    /// Telegram chat id allowed to issue commands
    pub admin_id: Option<i64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "reelpost".to_string(),
            remark: "Posted via Telegram".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            telegram: "https://api.telegram.org".to_string(),
            omdb: "https://www.omdbapi.com".to_string(),
            shrink: "https://shrinkearn.com".to_string(),
            oauth_token: "https://oauth2.googleapis.com/token".to_string(),
            blogger: "https://www.googleapis.com/blogger/v3".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load `path` if it exists, overlay the environment, and validate
    pub fn init(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::load(path)?
        } else {
            tracing::info!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from a variable lookup (the environment in production)
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let creds = &mut self.credentials;
        let fields: [(&str, &mut String); 8] = [
            ("TELEGRAM_TOKEN", &mut creds.telegram_token),
            ("OMDB_API_KEY", &mut creds.omdb_api_key),
            ("SHRINK_API_TOKEN", &mut creds.shrink_api_token),
            ("BLOGGER_CLIENT_ID", &mut creds.blogger_client_id),
            ("BLOGGER_CLIENT_SECRET", &mut creds.blogger_client_secret),
            ("BLOGGER_REFRESH_TOKEN", &mut creds.blogger_refresh_token),
            ("BLOG_ID", &mut creds.blog_id),
            ("BIND_ADDRESS", &mut self.server.bind),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }

        if let Some(admin) = lookup("ADMIN_ID") {
            let id = admin
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("ADMIN_ID must be an integer, got '{}'", admin)))?;
            creds.admin_id = Some(id);
        }

        Ok(())
    }

    /// Every credential is required; startup fails otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let creds = &self.credentials;
        let required = [
            ("TELEGRAM_TOKEN", &creds.telegram_token),
            ("OMDB_API_KEY", &creds.omdb_api_key),
            ("SHRINK_API_TOKEN", &creds.shrink_api_token),
            ("BLOGGER_CLIENT_ID", &creds.blogger_client_id),
            ("BLOGGER_CLIENT_SECRET", &creds.blogger_client_secret),
            ("BLOGGER_REFRESH_TOKEN", &creds.blogger_refresh_token),
            ("BLOG_ID", &creds.blog_id),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::MissingField(name.to_string()));
        }
        self.admin_id()?;
        Ok(())
    }

    pub fn admin_id(&self) -> Result<i64, ConfigError> {
        self.credentials
            .admin_id
            .ok_or_else(|| ConfigError::MissingField("ADMIN_ID".to_string()))
    }

    /// Default config rendered as YAML, for `init-config`
    pub fn default_yaml() -> Result<String, ConfigError> {
        serde_yaml::to_string(&Self::default())
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }
}
