use async_trait::async_trait;
use crate::application::errors::ServiceError;

/// Bot trait - abstraction for the chat platform used to answer commands
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a message to a chat. Text may contain HTML formatting.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ServiceError>;
}
