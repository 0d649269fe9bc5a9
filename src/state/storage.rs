//! Pending-intent storage
//!
//! This module keeps, per user, the tool whose input the user's next free-text
//! message is expected to provide. Entries live in process memory only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::config::SessionConfig;
use crate::models::ToolKind;

/// Tool selection waiting for the user's free-text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingIntent {
    pub tool: ToolKind,
    pub created_at: Instant,
}

impl PendingIntent {
    fn new(tool: ToolKind) -> Self {
        Self {
            tool,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| self.created_at.elapsed() >= ttl)
    }
}

/// In-memory map of user id to pending intent
///
/// Cloning yields another handle to the same map.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<i64, PendingIntent>>>,
    ttl: Option<Duration>,
}

impl SessionStore {
    /// Create a store whose entries expire after `ttl` (never, when `None`)
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Create a store from session configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.ttl_minutes.map(|m| Duration::from_secs(m * 60)))
    }

    /// Record the tool a user picked, replacing any earlier pick
    pub fn set_pending(&self, user_id: i64, tool: ToolKind) {
        let previous = self.lock().insert(user_id, PendingIntent::new(tool));
        debug!(user_id = user_id, tool = %tool, replaced = ?previous.map(|p| p.tool), "Pending intent set");
    }

    /// Remove and return the user's pending tool, if any
    pub fn take_pending(&self, user_id: i64) -> Option<ToolKind> {
        let intent = self.lock().remove(&user_id)?;

        if intent.is_expired(self.ttl) {
            debug!(user_id = user_id, tool = %intent.tool, "Pending intent expired");
            return None;
        }

        Some(intent.tool)
    }

    /// Drop every entry older than the TTL, returning how many were removed
    pub fn sweep_expired(&self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };

        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, intent| !intent.is_expired(Some(ttl)));
        before - entries.len()
    }

    /// Number of users with a pending intent
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, PendingIntent>> {
        // No code path panics mid-update, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

/// Periodically evicts expired pending intents
#[derive(Debug)]
pub struct SessionSweeper {
    store: SessionStore,
    interval: Duration,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl SessionSweeper {
    pub fn new(store: SessionStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            handle: None,
        }
    }

    /// Start the background sweep task; must be called inside a tokio runtime
    pub fn start(&mut self) {
        if self.handle.is_some() {
            warn!("Session sweeper is already running");
            return;
        }

        if self.store.ttl().is_none() {
            debug!("Session TTL disabled, sweeper not started");
            return;
        }

        let store = self.store.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let removed = store.sweep_expired();
                if removed > 0 {
                    info!(removed = removed, remaining = store.len(), "Swept expired pending intents");
                }
            }
        });

        self.handle = Some(handle);
        info!("Started session sweeper with interval {:?}", self.interval);
    }

    /// Stop the background sweep task
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Stopped session sweeper");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for SessionSweeper {
    fn drop(&mut self) {
        self.stop();
    }
}
