//! Message handling - Parsing inbound commands and rendering outbound articles

pub mod parser;
pub mod renderer;

pub use parser::{CommandParser, USAGE};
pub use renderer::ArticleRenderer;
