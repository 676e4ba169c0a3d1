//! # Leaderboard Error Types

use thiserror::Error;

/// Errors from leaderboard aggregation and refresh.
#[derive(Error, Debug, Clone)]
pub enum LeaderboardError {
    /// The remote score feed failed or timed out.
    #[error("upstream unavailable: {source_name}: {reason}")]
    UpstreamUnavailable {
        /// Which source failed (e.g. `"chain"`).
        source_name: String,
        /// The underlying failure description.
        reason: String,
    },

    /// No remote snapshot has ever been obtained.
    #[error("no leaderboard snapshot has been obtained yet")]
    NoSnapshot,
}
