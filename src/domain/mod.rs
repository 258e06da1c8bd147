//! Domain layer - Core business types with no I/O
//!
//! This layer contains:
//! - Entities: Request-scoped values (IncomingCommand, MovieMetadata, ArticlePayload)
//! - Traits: One capability per external dependency (Bot, MetadataSource, ...)

pub mod entities;
pub mod traits;
