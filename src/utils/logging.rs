//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AIFactory application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::ToolKind;
use crate::utils::errors::{AIFactoryError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "aifactory.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AIFactoryError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a finished completion turn
pub fn log_completion(user_id: i64, tool: ToolKind, backend: &str, duration_ms: u64, chunks: usize) {
    info!(
        user_id = user_id,
        tool = %tool,
        backend = backend,
        duration_ms = duration_ms,
        chunks = chunks,
        "Completion delivered"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a web-app payload that did not map to a tool
pub fn log_unrecognized_selection(user_id: i64, payload: &str, parse_error: Option<&str>) {
    if let Some(parse_error) = parse_error {
        warn!(
            user_id = user_id,
            payload = payload,
            error = parse_error,
            "Malformed web app payload"
        );
    } else {
        debug!(user_id = user_id, payload = payload, "Web app payload matched no tool");
    }
}
