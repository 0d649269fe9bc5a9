//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod tool;
pub mod menu;

// Re-export commonly used models
pub use tool::ToolKind;
pub use menu::{MenuSelection, MenuOutcome, classify_payload};
