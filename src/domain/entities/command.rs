use chrono::{DateTime, Utc};

/// A chat message received through the webhook, before any interpretation
#[derive(Debug, Clone)]
pub struct IncomingCommand {
    pub id: String,
    pub chat_id: i64,
    pub user_id: Option<i64>,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl IncomingCommand {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id,
            user_id: None,
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    pub fn with_user(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }
}

/// The three fields a well-formed command carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub title: String,
    pub category: String,
    pub link: String,
}

impl PublishRequest {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            link: link.into(),
        }
    }
}
