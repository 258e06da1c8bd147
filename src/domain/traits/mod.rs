//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod sources;

pub use bot::Bot;
pub use sources::{LinkShortener, MetadataSource, PublishingSink, TokenSource};
