//! Error handling for AIFactory
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for AIFactory application
#[derive(Error, Debug)]
pub enum AIFactoryError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Completion backend error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Completion backend specific errors
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    #[error("Completion request timed out")]
    Timeout,

    #[error("Completion API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),

    #[error("Assistant run ended with status '{status}'")]
    RunFailed { status: String },

    #[error("Assistant run did not finish within {seconds}s")]
    PollTimeout { seconds: u64 },

    #[error("Completion API returned an empty answer")]
    EmptyResponse,
}

/// Result type alias for AIFactory operations
pub type Result<T> = std::result::Result<T, AIFactoryError>;

/// Result type alias for completion backend operations
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else if e.is_decode() {
            CompletionError::InvalidResponse(e.to_string())
        } else {
            CompletionError::RequestFailed(e.to_string())
        }
    }
}

impl AIFactoryError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AIFactoryError::Telegram(_) => true,
            AIFactoryError::Completion(_) => true,
            AIFactoryError::Config(_) => false,
            AIFactoryError::ConfigLoad(_) => false,
            AIFactoryError::Http(_) => true,
            AIFactoryError::Serialization(_) => false,
            AIFactoryError::Io(_) => true,
            AIFactoryError::UrlParse(_) => false,
            AIFactoryError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AIFactoryError::Config(_) => ErrorSeverity::Critical,
            AIFactoryError::ConfigLoad(_) => ErrorSeverity::Critical,
            AIFactoryError::InvalidInput(_) => ErrorSeverity::Info,
            AIFactoryError::Serialization(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
