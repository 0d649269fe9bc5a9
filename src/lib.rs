//! AIFactory Telegram Bot
//!
//! A Telegram bot that turns a web-app menu selection into a business-assistance
//! prompt, forwards the user's next message to a generative AI backend and relays
//! the answer back in message-sized chunks.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod server;
pub mod state;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AIFactoryError, Result};

// Re-export main components for easy access
pub use models::ToolKind;
pub use services::ServiceFactory;
pub use state::{SessionStore, SessionSweeper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
