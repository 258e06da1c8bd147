//! Application services - Business logic orchestration

pub mod command_service;
pub mod publish_service;

pub use command_service::{CommandOutcome, CommandService, DEFAULT_REMARK};
pub use publish_service::PublishService;
