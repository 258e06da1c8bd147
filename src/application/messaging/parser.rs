//! Command parser - Turns raw chat text into a PublishRequest

use crate::application::errors::ParseError;
use crate::domain::entities::PublishRequest;

/// Usage hint sent back when a command cannot be parsed
pub const USAGE: &str =
    "⚠️ Invalid format. Please send like:\nMovie: Name\nCategory: Type\nLink: http://example.com";

/// Parses `Label: value` commands.
///
/// A command is exactly three lines; each must contain a `:`. The label is
/// ignored and the value is everything after the first `:`, trimmed, so
/// `Link: http://x` keeps the scheme's colon.
pub struct CommandParser;

impl CommandParser {
    pub fn parse(text: &str) -> Result<PublishRequest, ParseError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != 3 {
            return Err(ParseError::LineCount(lines.len()));
        }

        let mut fields: [String; 3] = Default::default();
        for (i, line) in lines.iter().enumerate() {
            let (_, value) = line
                .split_once(':')
                .ok_or(ParseError::MissingSeparator(i + 1))?;
            fields[i] = value.trim().to_string();
        }

        let [title, category, link] = fields;
        Ok(PublishRequest::new(title, category, link))
    }
}
