//! # Remote Score Sources
//!
//! The capability seam for the remote per-address score feed. The
//! aggregator polls a [`RemoteScoreSource`]; implementations wrap whatever
//! transport serves the scores (a chain read adapter here, an HTTP feed in
//! other deployments). Fetches are treated as fallible I/O: the aggregator
//! bounds them with a timeout and retains its last snapshot on failure.

use crate::error::LeaderboardError;
use crate::merge::LeaderboardRow;

/// A fallible remote feed of per-address scores.
pub trait RemoteScoreSource: Send + Sync {
    /// A short name for logs and error messages.
    fn source_name(&self) -> &str;

    /// Fetch the current remote rows.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::UpstreamUnavailable`] when the feed
    /// cannot be reached or answers malformed data.
    fn fetch_scores(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<LeaderboardRow>, LeaderboardError>> + Send;
}
