//! TTL Sweep Task
//!
//! Background task that periodically evicts stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Shortest period the sweeper will tick at. Tokio intervals reject zero.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

// == Sweep Handle ==
/// Owning handle to a running sweep task.
///
/// Dropping the handle aborts the task. [`SweepHandle::stop`] asks it to exit
/// and waits until it has.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SweepHandle {
    /// Signals the task to stop and waits for it to finish.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            report_exit(task.await);
        }
        debug!("Sweep task stopped");
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Logs how the sweep task ended. Returns true if it panicked.
fn report_exit(result: Result<(), JoinError>) -> bool {
    match result {
        Err(e) if e.is_panic() => {
            warn!(error = %e, "Sweep task panicked");
            true
        }
        _ => false,
    }
}

/// Spawns a background task that sweeps `store` once every `period`.
///
/// The first sweep happens one full period after the call. Each sweep holds
/// the write lock for a full scan of the store.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(5))));
/// let sweeper = spawn_sweep_task(store.clone(), Duration::from_secs(5));
/// // Later:
/// sweeper.stop().await;
/// ```
pub fn spawn_sweep_task(store: Arc<RwLock<CacheStore>>, period: Duration) -> SweepHandle {
    let period = period.max(MIN_SWEEP_PERIOD);
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        debug!("Starting TTL sweep task with period of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                changed = shutdown_rx.changed() => {
                    // A closed channel means the handle is gone
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                    continue;
                }
            }

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.sweep(Instant::now());
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "TTL sweep evicted stale entries");
            } else {
                debug!(remaining, "TTL sweep: no stale entries found");
            }
        }
    });

    SweepHandle {
        shutdown,
        task: Some(task),
    }
}
