//! reelpost - Telegram-driven movie article publisher
//!
//! An admin sends `Movie / Category / Link` to the bot; the relay looks the
//! movie up on OMDb, shortens the link with ShrinkEarn and posts an article
//! to Blogger, reporting the result back in the chat.

pub mod domain;
pub mod application;
pub mod infrastructure;
