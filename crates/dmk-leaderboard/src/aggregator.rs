//! # Leaderboard Aggregator
//!
//! Caches the last good remote snapshot and serves merged top lists.
//!
//! ## Last-Write-Wins by Tick
//!
//! Every refresh attempt takes a monotonically increasing tick number
//! before fetching. A snapshot installs only if its tick is newer than the
//! cached one, so a stale fetch that completes out of order — cancelled,
//! superseded, or just slow — can never overwrite fresher data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use dmk_core::Timestamp;

use crate::error::LeaderboardError;
use crate::merge::{merge_rows, LeaderboardRow};
use crate::remote::RemoteScoreSource;

/// How often the remote feed is polled.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Upper bound on a single remote fetch.
pub const REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

/// The cached remote rows with their provenance.
#[derive(Debug, Clone)]
struct Snapshot {
    rows: Vec<LeaderboardRow>,
    tick: u64,
    fetched_at: Timestamp,
}

/// Aggregates local points with a cached remote score snapshot.
pub struct LeaderboardAggregator<S> {
    source: S,
    snapshot: RwLock<Option<Snapshot>>,
    tick: AtomicU64,
    timeout: Duration,
}

impl<S: RemoteScoreSource> LeaderboardAggregator<S> {
    /// Create an aggregator over a remote source with the default fetch
    /// timeout.
    pub fn new(source: S) -> Self {
        Self::with_timeout(source, REFRESH_TIMEOUT)
    }

    /// Create an aggregator with an explicit fetch timeout.
    pub fn with_timeout(source: S, timeout: Duration) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
            tick: AtomicU64::new(0),
            timeout,
        }
    }

    /// Fetch the remote feed once and install the result.
    ///
    /// Fails soft: on error or timeout the previous snapshot is retained
    /// and the failure is logged at `warn`. The returned error is
    /// informational — callers driving a poll loop ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::UpstreamUnavailable`] when the fetch
    /// failed or timed out.
    pub async fn refresh_once(&self) -> Result<(), LeaderboardError> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed) + 1;

        let result = tokio::time::timeout(self.timeout, self.source.fetch_scores()).await;
        let rows = match result {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                tracing::warn!(
                    source = self.source.source_name(),
                    error = %e,
                    "leaderboard refresh failed; keeping previous snapshot"
                );
                return Err(e);
            }
            Err(_) => {
                let e = LeaderboardError::UpstreamUnavailable {
                    source_name: self.source.source_name().to_string(),
                    reason: format!("timed out after {:?}", self.timeout),
                };
                tracing::warn!(
                    source = self.source.source_name(),
                    timeout = ?self.timeout,
                    "leaderboard refresh timed out; keeping previous snapshot"
                );
                return Err(e);
            }
        };

        self.install(tick, rows);
        Ok(())
    }

    /// Install a snapshot if it is newer than the cached one.
    fn install(&self, tick: u64, rows: Vec<LeaderboardRow>) {
        let mut guard = self.snapshot.write();
        match guard.as_ref() {
            Some(current) if current.tick >= tick => {
                tracing::debug!(
                    stale_tick = tick,
                    current_tick = current.tick,
                    "discarding out-of-order leaderboard snapshot"
                );
            }
            _ => {
                *guard = Some(Snapshot {
                    rows,
                    tick,
                    fetched_at: Timestamp::now(),
                });
            }
        }
    }

    /// Merge the local entry against the cached remote snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::NoSnapshot`] only when no refresh has
    /// ever succeeded — callers may fall back to a local-only list.
    pub fn merged(&self, local: LeaderboardRow) -> Result<Vec<LeaderboardRow>, LeaderboardError> {
        let guard = self.snapshot.read();
        match guard.as_ref() {
            Some(snapshot) => Ok(merge_rows(local, &snapshot.rows)),
            None => Err(LeaderboardError::NoSnapshot),
        }
    }

    /// When the cached snapshot was fetched, if any.
    pub fn last_fetched_at(&self) -> Option<Timestamp> {
        self.snapshot.read().as_ref().map(|s| s.fetched_at)
    }
}

impl<S: RemoteScoreSource + 'static> LeaderboardAggregator<S> {
    /// Spawn the periodic refresh loop.
    ///
    /// Runs independently of user-triggered operations until the returned
    /// handle is aborted. Per-tick failures are logged inside
    /// [`refresh_once`](Self::refresh_once) and do not stop the loop.
    pub fn spawn_refresher(self: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let aggregator = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                // Fail-soft: errors already logged and the snapshot kept.
                let _ = aggregator.refresh_once().await;
            }
        })
    }
}

impl<S> std::fmt::Debug for LeaderboardAggregator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardAggregator")
            .field("has_snapshot", &self.snapshot.read().is_some())
            .field("tick", &self.tick.load(Ordering::Relaxed))
            .finish()
    }
}
