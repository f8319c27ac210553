//! Schedule feed and status watcher
//!
//! The feed is the push boundary of the availability engine: the host
//! (a remote listener, a test, a replay) pushes weekly snapshots or a
//! feed error at arbitrary times, including never. The watcher turns
//! feed states into [`BusinessStatus`] values, re-deriving on every
//! snapshot and on a coarse periodic tick so the closed→open flip
//! happens from clock advance alone.
//!
//! Feed failure is its own retryable state, never conflated with
//! "closed".

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::availability::compute_status;
use shared::models::{BusinessStatus, ScheduleRecord};

/// State of the schedule feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// No snapshot delivered yet
    Loading,
    /// Latest snapshot of weekly records
    Ready(Vec<ScheduleRecord>),
    /// Feed delivery failed (retryable)
    Failed(String),
}

/// Producer side of the schedule subscription
///
/// Holds the watch channel; every subscriber sees the latest state.
/// Dropping the feed closes the channel and stops attached watchers.
pub struct ScheduleFeed {
    tx: watch::Sender<FeedState>,
}

impl ScheduleFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeedState::Loading);
        Self { tx }
    }

    /// Subscribe to feed states (starts at the current state)
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    /// Push a fresh weekly snapshot
    pub fn push_snapshot(&self, schedules: Vec<ScheduleRecord>) {
        tracing::debug!(records = schedules.len(), "Schedule snapshot received");
        self.tx.send_replace(FeedState::Ready(schedules));
    }

    /// Push a feed failure
    pub fn push_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Schedule feed failed");
        self.tx.send_replace(FeedState::Failed(message));
    }
}

impl Default for ScheduleFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Status derived from the feed, published to UI consumers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusState {
    /// Feed still loading
    Loading,
    /// Status computed from the latest snapshot
    Ready(BusinessStatus),
    /// Feed or schedule-format failure (retryable error state)
    Failed(String),
}

impl StatusState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Ready(status) if status.is_open)
    }
}

/// Background task re-deriving [`BusinessStatus`] from the feed
///
/// Recomputes on every feed change and on every tick, publishes on
/// its own watch channel, and stops on shutdown or when the feed
/// closes. Dropping the task drops the status channel, so consumers
/// observe teardown.
pub struct StatusWatcher {
    feed: watch::Receiver<FeedState>,
    status_tx: watch::Sender<StatusState>,
    timezone: Tz,
    tick: Duration,
    shutdown: CancellationToken,
    now_fn: fn() -> DateTime<Utc>,
}

impl StatusWatcher {
    pub fn new(
        feed: watch::Receiver<FeedState>,
        timezone: Tz,
        tick: Duration,
        shutdown: CancellationToken,
    ) -> (Self, watch::Receiver<StatusState>) {
        let (status_tx, status_rx) = watch::channel(StatusState::Loading);
        let watcher = Self {
            feed,
            status_tx,
            timezone,
            tick,
            shutdown,
            now_fn: Utc::now,
        };
        (watcher, status_rx)
    }

    /// Replace the clock source (deterministic tests)
    #[cfg(test)]
    fn with_now_fn(mut self, now_fn: fn() -> DateTime<Utc>) -> Self {
        self.now_fn = now_fn;
        self
    }

    /// 主循环：快照变更 + 周期性重算 + 关机信号
    pub async fn run(mut self) {
        tracing::info!("Business status watcher started");

        loop {
            self.recompute();

            tokio::select! {
                changed = self.feed.changed() => {
                    if changed.is_err() {
                        tracing::info!("Schedule feed closed, stopping status watcher");
                        return;
                    }
                }
                _ = tokio::time::sleep(self.tick) => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Status watcher received shutdown signal");
                    return;
                }
            }
        }
    }

    fn recompute(&mut self) {
        let state = self.feed.borrow_and_update().clone();
        let next = match state {
            FeedState::Loading => StatusState::Loading,
            FeedState::Failed(message) => StatusState::Failed(message),
            FeedState::Ready(schedules) => {
                let now = (self.now_fn)().with_timezone(&self.timezone);
                match compute_status(&schedules, now) {
                    Ok(status) => StatusState::Ready(status),
                    Err(e) => {
                        tracing::warn!(error = %e, "Schedule snapshot rejected");
                        StatusState::Failed(e.to_string())
                    }
                }
            }
        };
        // Only notify subscribers on actual state changes; tick
        // recomputations that land on the same status stay silent
        self.status_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn record(day_index: u8, label: &str, open: &str, close: &str) -> ScheduleRecord {
        ScheduleRecord {
            day_index,
            day_label: label.to_string(),
            is_open_day: true,
            open_time: open.to_string(),
            close_time: close.to_string(),
        }
    }

    async fn next_state(rx: &mut watch::Receiver<StatusState>) -> StatusState {
        rx.changed().await.unwrap();
        rx.borrow().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_drives_status() {
        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, mut status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown.clone(),
        );
        tokio::spawn(watcher.run());

        assert_eq!(*status_rx.borrow(), StatusState::Loading);

        feed.push_snapshot(vec![]);
        let state = next_state(&mut status_rx).await;
        match state {
            StatusState::Ready(status) => {
                assert!(!status.is_open);
                assert_eq!(
                    status.message.as_deref(),
                    Some("No hay horarios configurados")
                );
            }
            other => panic!("expected Ready, got {other:?}"),
        }

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_failure_is_not_closed() {
        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, mut status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown.clone(),
        );
        tokio::spawn(watcher.run());

        feed.push_error("network unreachable");
        let state = next_state(&mut status_rx).await;
        assert_eq!(state, StatusState::Failed("network unreachable".to_string()));
        assert!(!state.is_open());

        shutdown.cancel();
    }

    // Fixed clock for the tick test, advanced by the test body
    static FAKE_NOW_MS: AtomicI64 = AtomicI64::new(0);

    fn fake_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(FAKE_NOW_MS.load(Ordering::SeqCst))
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_catches_closed_to_open_without_snapshot() {
        // Tuesday 2026-08-25, store opens 14:00 UTC
        let before_open = Utc.with_ymd_and_hms(2026, 8, 25, 13, 59, 0).unwrap();
        let after_open = Utc.with_ymd_and_hms(2026, 8, 25, 14, 1, 0).unwrap();
        FAKE_NOW_MS.store(before_open.timestamp_millis(), Ordering::SeqCst);

        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, mut status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown.clone(),
        );
        let watcher = watcher.with_now_fn(fake_now);
        tokio::spawn(watcher.run());

        feed.push_snapshot(vec![record(2, "Martes", "14:00", "22:00")]);
        let state = next_state(&mut status_rx).await;
        assert!(!state.is_open());

        // Clock advances past opening; no new snapshot is pushed
        FAKE_NOW_MS.store(after_open.timestamp_millis(), Ordering::SeqCst);
        let state = next_state(&mut status_rx).await;
        assert!(state.is_open());

        shutdown.cancel();
    }

    // Fixed clock: Tuesday 2026-08-25 12:00 UTC, so the malformed
    // record below is today's and actually gets parsed
    fn tuesday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_snapshot_becomes_failed_state() {
        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, mut status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown.clone(),
        );
        let watcher = watcher.with_now_fn(tuesday_noon);
        tokio::spawn(watcher.run());

        feed.push_snapshot(vec![record(2, "Martes", "2pm", "22:00")]);
        let state = next_state(&mut status_rx).await;
        assert!(matches!(state, StatusState::Failed(_)));

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_tears_down_status_channel() {
        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, mut status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown.clone(),
        );
        let handle = tokio::spawn(watcher.run());

        shutdown.cancel();
        handle.await.unwrap();

        // Sender dropped with the watcher: subscribers observe teardown
        assert!(status_rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_feed_stops_watcher() {
        let feed = ScheduleFeed::new();
        let shutdown = CancellationToken::new();
        let (watcher, _status_rx) = StatusWatcher::new(
            feed.subscribe(),
            chrono_tz::UTC,
            Duration::from_secs(60),
            shutdown,
        );
        let handle = tokio::spawn(watcher.run());

        drop(feed);
        handle.await.unwrap();
    }
}
