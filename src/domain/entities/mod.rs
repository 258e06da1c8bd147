//! Domain entities - Request-scoped values with no external dependencies

pub mod article;
pub mod command;
pub mod movie;

pub use article::ArticlePayload;
pub use command::{IncomingCommand, PublishRequest};
pub use movie::MovieMetadata;
