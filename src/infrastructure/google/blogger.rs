//! Blogger publishing sink

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::ServiceError;
use crate::domain::entities::ArticlePayload;
use crate::domain::traits::PublishingSink;

#[derive(Deserialize, Debug)]
struct PostResponse {
    url: Option<String>,
}

/// Blogger v3 client bound to one blog
pub struct BloggerClient {
    blog_id: String,
    base_url: String,
    client: Client,
}

impl BloggerClient {
    pub fn new(blog_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            blog_id: blog_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/blogs/{}/posts/", self.base_url, self.blog_id)
    }
}

#[async_trait]
impl PublishingSink for BloggerClient {
    async fn create_post(&self, token: &str, article: &ArticlePayload) -> Result<String, ServiceError> {
        let response = self.client
            .post(self.posts_url())
            .bearer_auth(token)
            .json(article)
            .send()
            .await
            .map_err(ServiceError::network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Blogger API error ({}): {}", status, body);
            return Err(ServiceError::Api { status: status.as_u16(), body });
        }

        let post: PostResponse = response
            .json()
            .await
            .map_err(ServiceError::decode)?;

        post.url.ok_or_else(|| ServiceError::Parse("post created without url".to_string()))
    }
}
