use std::sync::Arc;

use crate::application::errors::ServiceError;
use crate::domain::entities::ArticlePayload;
use crate::domain::traits::{PublishingSink, TokenSource};

/// Publishes articles: fetches a fresh token, then creates the post
pub struct PublishService {
    tokens: Arc<dyn TokenSource>,
    sink: Arc<dyn PublishingSink>,
}

impl PublishService {
    pub fn new(tokens: Arc<dyn TokenSource>, sink: Arc<dyn PublishingSink>) -> Self {
        Self { tokens, sink }
    }

    /// Publish `article` and return the post URL.
    ///
    /// No token means no publish call.
    pub async fn publish(&self, article: &ArticlePayload) -> Result<String, ServiceError> {
        let token = self.tokens.access_token().await?;
        self.sink.create_post(&token, article).await
    }
}
