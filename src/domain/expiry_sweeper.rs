//! Background removal of expired links.
//!
//! Lookups already drop expired links lazily, but a link that is never
//! requested again would stay in memory forever. The sweeper bounds memory
//! by periodically asking the repository to remove every link older than
//! [`LINK_TTL`](crate::domain::entities::LINK_TTL).
//!
//! The loop ticks independently of requests and only touches the store's
//! lock once per tick. It stops when the [`ExpirySweeper`] handle is stopped
//! or dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::entities::link_ttl;
use crate::domain::repositories::LinkRepository;

/// Default delay between two sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Handle to a running sweeper task.
#[derive(Debug)]
pub struct ExpirySweeper {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl ExpirySweeper {
    /// Spawns the sweeper on the current Tokio runtime.
    ///
    /// The first sweep happens one `period` after start.
    pub fn start<R>(repository: Arc<R>, period: Duration) -> Self
    where
        R: LinkRepository + ?Sized + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run_expiry_sweeper(repository, period, shutdown_rx));

        info!(interval_secs = period.as_secs(), "Expiry sweeper started");

        Self {
            shutdown_tx,
            task: Some(task),
        }
    }

    /// Signals the task to stop after its current sweep, if any.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Stops the task and waits for it to exit.
    pub async fn join(mut self) {
        self.stop();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!("Expiry sweeper task ended abnormally: {}", e);
        }
        info!("Expiry sweeper stopped");
    }
}

impl Drop for ExpirySweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sweeps `repository` every `period` until `shutdown` flips to `true` or its
/// sender is dropped.
pub async fn run_expiry_sweeper<R>(
    repository: Arc<R>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    R: LinkRepository + ?Sized,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!("Expiry sweeper received shutdown signal");
                    return;
                }
                continue;
            }
        }

        let removed = repository.sweep(link_ttl()).await;
        if removed > 0 {
            metrics::counter!("links_expired_total").increment(removed as u64);
            info!(removed, "Cleaned up expired links");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::memory::InMemoryLinkRepository;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    const PERIOD: Duration = Duration::from_secs(3600);
    const EPSILON: Duration = Duration::from_millis(1);

    fn expired_repo() -> Arc<InMemoryLinkRepository> {
        let clock = Arc::new(ManualClock::default());
        let repo = Arc::new(InMemoryLinkRepository::with_clock(clock.clone()));
        repo.insert_link("https://example.com/1");
        repo.insert_link("https://example.com/2");
        clock.advance(chrono::Duration::hours(25));
        repo
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_removes_expired_links_after_one_period() {
        let repo = expired_repo();
        let sweeper = ExpirySweeper::start(repo.clone(), PERIOD);

        time::sleep(PERIOD - EPSILON).await;
        assert_eq!(repo.len(), 2);

        time::sleep(EPSILON * 2).await;
        assert!(repo.is_empty());

        sweeper.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_calls_sweep_with_link_ttl_each_tick() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_sweep()
            .withf(|threshold| *threshold == link_ttl())
            .times(3)
            .returning(|_| 0);

        let mock_repo = Arc::new(mock_repo);
        let sweeper = ExpirySweeper::start(mock_repo.clone(), PERIOD);

        time::sleep(PERIOD * 3 + EPSILON).await;
        sweeper.join().await;

        // Last reference: expectations are verified here rather than in the task.
        let Ok(mut mock_repo) = Arc::try_unwrap(mock_repo) else {
            panic!("sweeper task still holds the repository");
        };
        mock_repo.checkpoint();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_sweeper_no_longer_sweeps() {
        let repo = expired_repo();
        let sweeper = ExpirySweeper::start(repo.clone(), PERIOD);

        sweeper.join().await;
        time::sleep(PERIOD * 2).await;

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_sweeper() {
        let repo = expired_repo();
        drop(ExpirySweeper::start(repo.clone(), PERIOD));

        time::sleep(PERIOD * 2).await;

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_exits_when_sender_dropped() {
        let repo = expired_repo();
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(run_expiry_sweeper(repo, PERIOD, rx));

        drop(tx);

        assert!(task.await.is_ok());
    }

    /// Runs the sweeper over `repo` for `ticks` periods on a paused runtime
    /// and returns the `links_expired_total` counter, if it was ever emitted.
    fn expired_counter_after(repo: Arc<InMemoryLinkRepository>, ticks: u32) -> Option<u64> {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .unwrap();

            runtime.block_on(async {
                let sweeper = ExpirySweeper::start(repo, PERIOD);
                time::sleep(PERIOD * ticks + EPSILON).await;
                sweeper.join().await;
            });
        });

        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .find_map(|(key, _, _, value)| match value {
                DebugValue::Counter(n) if key.key().name() == "links_expired_total" => Some(n),
                _ => None,
            })
    }

    #[test]
    fn test_sweep_reports_removed_count() {
        assert_eq!(expired_counter_after(expired_repo(), 1), Some(2));
    }

    #[test]
    fn test_empty_sweep_is_silent() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.insert_link("https://example.com/live");

        assert_eq!(expired_counter_after(repo, 3), None);
    }

    #[test]
    fn test_only_non_empty_ticks_are_reported() {
        // First tick removes both links, the next two find nothing.
        assert_eq!(expired_counter_after(expired_repo(), 3), Some(2));
    }
}
