//! State management module
//!
//! This module tracks which tool each user is expected to supply input for

pub mod storage;

// Re-export commonly used state components
pub use storage::{PendingIntent, SessionStore, SessionSweeper};
