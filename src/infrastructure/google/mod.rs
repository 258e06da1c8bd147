//! Google APIs - OAuth token exchange and Blogger publishing

pub mod blogger;
pub mod oauth;

pub use blogger::BloggerClient;
pub use oauth::GoogleOAuthClient;
