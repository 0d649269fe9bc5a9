//! HTTP surface
//!
//! Serves `/health` in every mode and `/webhook-info` when the bot runs on
//! webhooks. The webhook receiver itself is teloxide's router, merged in by
//! the caller.

pub mod shutdown;

pub use shutdown::ShutdownSignal;

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use teloxide::{Bot, prelude::*};
use tokio::net::TcpListener;
use tracing::info;

use crate::utils::errors::Result;
use crate::utils::logging;

/// Shared state of the HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub bot: Bot,
    pub version: &'static str,
    pub environment: Option<String>,
}

impl AppState {
    pub fn new(bot: Bot, environment: Option<String>) -> Self {
        Self {
            bot,
            version: crate::VERSION,
            environment,
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

/// Build the router for the HTTP surface
pub fn router(state: Arc<AppState>, webhook_enabled: bool) -> Router {
    let mut router = Router::new().route("/health", get(health));

    if webhook_enabled {
        router = router.route("/webhook-info", get(webhook_info));
    }

    router.with_state(state)
}

/// Liveness check; never touches the bot or the completion backend
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version,
        environment: state.environment.clone(),
    })
}

/// Relay Telegram's `getWebhookInfo`
pub async fn webhook_info(State(state): State<Arc<AppState>>) -> Response {
    match state.bot.get_webhook_info().await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            logging::log_api_error("getWebhookInfo", &e.to_string(), Some("webhook-info endpoint"));
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    status: "error",
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Run the router on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "HTTP server listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
