use async_trait::async_trait;

use crate::application::errors::ServiceError;
use crate::domain::entities::{ArticlePayload, MovieMetadata};

/// Looks up descriptive metadata for a movie title
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, title: &str) -> Result<MovieMetadata, ServiceError>;
}

/// Rewrites a URL into a monetized short URL
#[async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, link: &str) -> Result<String, ServiceError>;
}

/// Issues a short-lived bearer token for the publishing sink
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, ServiceError>;
}

/// Creates posts on the blogging platform
#[async_trait]
pub trait PublishingSink: Send + Sync {
    /// Publish `article` and return the URL of the created post
    async fn create_post(&self, token: &str, article: &ArticlePayload) -> Result<String, ServiceError>;
}
