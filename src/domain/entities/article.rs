use serde::Serialize;

/// A rendered blog post, ready to be sent to the publishing sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    pub labels: Vec<String>,
}
