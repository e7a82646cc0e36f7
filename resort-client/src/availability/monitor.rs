use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{Local, NaiveTime};
use shared::dining::{MealSchedule, StatsState};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::source::{StatsSource, load_availability};

type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;

/// Result of one [`AvailabilityMonitor::refresh`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated,
    Failed,
    /// Another refresh was still running
    Skipped,
}

/// Keeps one resort's [`StatsState`] current
///
/// Refreshes never overlap: a refresh requested while one is in flight is
/// skipped. Failures are published as `Unavailable` and not retried until
/// the next tick.
pub struct AvailabilityMonitor<S: ?Sized> {
    resort_id: i64,
    schedule: MealSchedule,
    poll_interval: Duration,
    clock: Clock,
    in_flight: AtomicBool,
    state_tx: watch::Sender<StatsState>,
    source: Arc<S>,
}

impl<S: StatsSource + ?Sized> AvailabilityMonitor<S> {
    pub fn new(source: Arc<S>, schedule: MealSchedule, resort_id: i64) -> Self {
        let (state_tx, _) = watch::channel(StatsState::Loading);
        Self {
            resort_id,
            schedule,
            poll_interval: Duration::from_secs(30),
            clock: Arc::new(|| Local::now().time()),
            in_flight: AtomicBool::new(false),
            state_tx,
            source,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the wall clock used to resolve the meal period
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn resort_id(&self) -> i64 {
        self.resort_id
    }

    pub fn subscribe(&self) -> watch::Receiver<StatsState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> StatsState {
        self.state_tx.borrow().clone()
    }

    /// Reload the counts once
    pub async fn refresh(&self) -> RefreshOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(resort_id = self.resort_id, "Refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        }
        let _guard = InFlight(&self.in_flight);

        let now = (self.clock)();
        match load_availability(self.source.as_ref(), &self.schedule, self.resort_id, now).await {
            Ok(snapshot) => {
                self.state_tx.send_replace(StatsState::Ready(snapshot));
                RefreshOutcome::Updated
            }
            Err(e) => {
                tracing::warn!(
                    resort_id = self.resort_id,
                    code = %e.code(),
                    category = e.category().name(),
                    error = %e,
                    "Stats unavailable"
                );
                self.state_tx.send_replace(StatsState::unavailable(e.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    /// Refresh immediately, then every poll interval until cancelled
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            resort_id = self.resort_id,
            interval_secs = self.poll_interval.as_secs(),
            "Availability monitor started"
        );
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.refresh() => {}
            }
        }
        tracing::info!(resort_id = self.resort_id, "Availability monitor stopped");
    }
}

/// Clears the in-flight flag when a refresh ends or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
