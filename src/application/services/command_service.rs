use std::sync::Arc;

use crate::application::errors::ParseError;
use crate::application::messaging::{ArticleRenderer, CommandParser, USAGE};
use crate::application::services::PublishService;
use crate::domain::entities::IncomingCommand;
use crate::domain::traits::{Bot, LinkShortener, MetadataSource};

/// Remark stamped on every article unless configured otherwise
pub const DEFAULT_REMARK: &str = "Posted via Telegram";

/// Terminal state of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Rejected,
    ParseFailed(ParseError),
    NotFound { title: String },
    LinkFailed,
    PublishFailed,
    Published { url: String },
}

impl CommandOutcome {
    /// Chat message reported back to the sender
    pub fn message(&self) -> String {
        match self {
            CommandOutcome::Rejected => "❌ You are not authorized to use this bot.".to_string(),
            CommandOutcome::ParseFailed(_) => USAGE.to_string(),
            CommandOutcome::NotFound { title } => {
                format!("❌ Movie not found in OMDb: {}", escape_html(title))
            }
            CommandOutcome::LinkFailed => "❌ Failed to shorten the link.".to_string(),
            CommandOutcome::PublishFailed => "❌ Failed to post to Blogger.".to_string(),
            CommandOutcome::Published { url } => format!("✅ Posted Successfully!\n🔗 {}", url),
        }
    }

    /// Whether the command got as far as a publish attempt
    pub fn reached_publish(&self) -> bool {
        matches!(self, CommandOutcome::PublishFailed | CommandOutcome::Published { .. })
    }
}

/// Escape user text for a `parse_mode: HTML` message.
///
/// Telegram rejects the whole message on a stray `<` or `&`.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Runs one command through authorize → parse → enrich → shorten → publish
/// and reports the outcome to the sender.
pub struct CommandService {
    bot: Arc<dyn Bot>,
    metadata: Arc<dyn MetadataSource>,
    shortener: Arc<dyn LinkShortener>,
    publisher: PublishService,
    admin_id: i64,
    remark: String,
}

impl CommandService {
    pub fn new(
        bot: Arc<dyn Bot>,
        metadata: Arc<dyn MetadataSource>,
        shortener: Arc<dyn LinkShortener>,
        publisher: PublishService,
        admin_id: i64,
    ) -> Self {
        Self {
            bot,
            metadata,
            shortener,
            publisher,
            admin_id,
            remark: DEFAULT_REMARK.to_string(),
        }
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    /// Handle a command. Exactly one status message is sent per call.
    pub async fn handle(&self, command: IncomingCommand) -> CommandOutcome {
        tracing::info!(
            "Command {} from chat {} (user {:?})",
            command.id,
            command.chat_id,
            command.user_id
        );

        let outcome = match self.run(&command).await {
            Ok(url) => CommandOutcome::Published { url },
            Err(outcome) => outcome,
        };

        tracing::info!("Command {} finished: {:?}", command.id, outcome);

        if let Err(e) = self.bot.send_message(command.chat_id, &outcome.message()).await {
            tracing::warn!("Failed to deliver status to chat {}: {}", command.chat_id, e);
        }

        outcome
    }

    async fn run(&self, command: &IncomingCommand) -> Result<String, CommandOutcome> {
        if command.chat_id != self.admin_id {
            tracing::warn!("Unauthorized chat {} rejected", command.chat_id);
            return Err(CommandOutcome::Rejected);
        }

        let request = CommandParser::parse(&command.text).map_err(|e| {
            tracing::debug!("Command {} malformed: {}", command.id, e);
            CommandOutcome::ParseFailed(e)
        })?;

        let movie = self.metadata.fetch(&request.title).await.map_err(|e| {
            tracing::warn!("Metadata lookup for '{}' failed: {}", request.title, e);
            CommandOutcome::NotFound { title: request.title.clone() }
        })?;

        let short_link = self.shortener.shorten(&request.link).await.map_err(|e| {
            tracing::warn!("Shortening '{}' failed: {}", request.link, e);
            CommandOutcome::LinkFailed
        })?;

        let article = ArticleRenderer::render(&movie, &short_link, &request.category, &self.remark);

        self.publisher.publish(&article).await.map_err(|e| {
            tracing::error!("Publishing '{}' failed: {}", article.title, e);
            CommandOutcome::PublishFailed
        })
    }
}
