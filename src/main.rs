//! AIFactory Telegram Bot
//!
//! Main application entry point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{info, warn};

use AIFactory::{
    config::{BotMode, Settings},
    handlers,
    middleware::LoggingMiddleware,
    server::{self, shutdown, AppState, ShutdownSignal},
    services::ServiceFactory,
    state::{SessionStore, SessionSweeper},
    utils::{errors::AIFactoryError, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration; any failure here ends the process before serving traffic
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", AIFactory::info());

    // Initialize state management
    let store = SessionStore::from_config(&settings.session);
    let mut sweeper = SessionSweeper::new(
        store.clone(),
        Duration::from_secs(settings.session.sweep_interval_seconds),
    );
    sweeper.start();

    // Initialize services
    let services = ServiceFactory::new(&settings)?;
    info!(
        backend = services.completion.name(),
        tools_url = %services.tools_url,
        "Services initialized"
    );

    let bot = Bot::new(&settings.bot.token);
    let shutdown = ShutdownSignal::new().spawn_broadcast();

    let mut dispatcher = Dispatcher::builder(
        bot.clone(),
        handlers::schema(LoggingMiddleware::from_config(&settings.logging)),
    )
    .dependencies(dptree::deps![services, store])
    .default_handler(|upd| async move {
        warn!(update_id = upd.id.0, "Unhandled update");
    })
    .error_handler(LoggingErrorHandler::with_custom_text("An error from the update handler"))
    .build();

    let shutdown_token = dispatcher.shutdown_token();
    let stop_requested = shutdown.clone();
    tokio::spawn(async move {
        shutdown::wait_for(stop_requested).await;
        match shutdown_token.shutdown() {
            Ok(stopped) => stopped.await,
            Err(e) => warn!(error = %e, "Dispatcher was not running at shutdown"),
        }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    let state = Arc::new(AppState::new(bot.clone(), settings.server.environment.clone()));

    match settings.bot.mode {
        BotMode::Polling => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            let router = server::router(state, false);
            let http = tokio::spawn(server::serve(listener, router, shutdown::wait_for(shutdown)));

            info!("Starting bot with polling mode...");
            dispatcher.dispatch().await;

            if let Err(e) = http.await {
                warn!(error = %e, "HTTP server task ended abnormally");
            }
        }
        BotMode::Webhook => {
            let endpoint = settings
                .webhook_endpoint()
                .ok_or_else(|| AIFactoryError::Config("Webhook mode requires a webhook URL".to_string()))?;
            let url: url::Url = endpoint.parse()?;

            info!(webhook = %url, "Registering webhook...");
            let (update_listener, stop_flag, webhook_router) =
                webhooks::axum_to_router(bot.clone(), webhooks::Options::new(addr, url)).await?;

            let listener = tokio::net::TcpListener::bind(addr).await?;
            let router = server::router(state, true).merge(webhook_router);
            let http = tokio::spawn(server::serve(listener, router, stop_flag));

            info!("Starting bot with webhook mode...");
            dispatcher
                .dispatch_with_listener(
                    update_listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;

            if let Err(e) = http.await {
                warn!(error = %e, "HTTP server task ended abnormally");
            }
        }
    }

    sweeper.stop();
    info!("AIFactory bot has been shut down.");

    Ok(())
}
