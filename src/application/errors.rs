//! Application layer errors

use thiserror::Error;

/// Top-level process errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single external service call.
///
/// The command handler treats every variant the same way (the stage failed),
/// the distinction only matters for logs.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No access token in response: {0}")]
    MissingToken(String),
}

impl ServiceError {
    /// Transport failure. The request URL is dropped: it carries API keys
    /// and the bot token.
    pub fn network(e: reqwest::Error) -> Self {
        ServiceError::Network(e.without_url().to_string())
    }

    /// Undecodable response body, URL dropped as for `network`
    pub fn decode(e: reqwest::Error) -> Self {
        ServiceError::Parse(e.without_url().to_string())
    }
}

/// Command text parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected 3 lines, got {0}")]
    LineCount(usize),

    #[error("Line {0} has no ':' separator")]
    MissingSeparator(usize),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
