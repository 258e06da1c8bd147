//! Platform adapters - Telegram client and the inbound webhook server

pub mod telegram;
pub mod webhook;
