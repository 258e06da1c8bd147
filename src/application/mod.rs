//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Command handling and publishing orchestration
//! - Errors: Error types shared by every layer
//! - Messaging: Command parsing and article rendering

pub mod errors;
pub mod services;
pub mod messaging;
