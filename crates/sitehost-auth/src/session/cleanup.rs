//! Periodic expired-session sweeping.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::store::SessionStore;

/// Sweeps expired sessions out of the [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    /// Session table.
    store: Arc<SessionStore>,
    /// Time between sweeps.
    interval: Duration,
}

impl SessionCleanup {
    /// Creates a cleanup handler sweeping every `interval_minutes`.
    pub fn new(store: Arc<SessionStore>, interval_minutes: u64) -> Self {
        Self {
            store,
            interval: Duration::from_secs(interval_minutes.max(1) * 60),
        }
    }

    /// Runs one sweep and returns the number of sessions removed.
    pub fn run_cleanup(&self) -> usize {
        let removed = self.store.purge_expired();
        if removed > 0 {
            info!(removed, "Expired sessions swept");
        } else {
            debug!("Session sweep found nothing to remove");
        }
        removed
    }

    /// Spawns the sweep loop. It exits once `shutdown` flips to `true`.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_cleanup();
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            debug!("Session sweeper stopping");
                            break;
                        }
                    }
                }
            }
        })
    }
}
