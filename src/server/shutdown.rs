//! Process shutdown signals
//!
//! Ctrl-C and, on Unix, SIGTERM both end the process gracefully.

use tokio::sync::watch;
use tracing::{info, warn};

/// Resolves once the process is asked to stop
#[derive(Debug)]
pub struct ShutdownSignal {
    #[cfg(unix)]
    terminate: Option<tokio::signal::unix::Signal>,
}

impl ShutdownSignal {
    /// Register the signal handlers; must be called inside a tokio runtime
    pub fn new() -> Self {
        #[cfg(unix)]
        let terminate = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                None
            }
        };

        Self {
            #[cfg(unix)]
            terminate,
        }
    }

    /// Wait for Ctrl-C or SIGTERM
    pub async fn recv(self) {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match self.terminate {
                Some(mut signal) => {
                    signal.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
            _ = terminate => info!("Received SIGTERM, shutting down"),
        }
    }

    /// Wait for a signal, then notify every subscriber of the returned receiver
    pub fn spawn_broadcast(self) -> watch::Receiver<bool> {
        let (tx, rx) = watch::channel(false);

        tokio::spawn(async move {
            self.recv().await;
            let _ = tx.send(true);
        });

        rx
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once `receiver` observes a shutdown request
pub async fn wait_for(mut receiver: watch::Receiver<bool>) {
    // A dropped sender means nobody can request shutdown any more
    let _ = receiver.wait_for(|stop| *stop).await;
}
