//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Telegram client and the webhook server
//! - Service clients: OMDb, ShrinkEarn, Google OAuth and Blogger
//! - Wiring: Assembling the object graph from config

pub mod config;
pub mod adapters;
pub mod google;
pub mod omdb;
pub mod shrinkearn;
pub mod wiring;
