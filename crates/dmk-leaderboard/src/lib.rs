#![deny(missing_docs)]

//! # dmk-leaderboard — Leaderboard Aggregation
//!
//! Merges the locally tracked score with a remote per-address score feed,
//! deduplicates by address, and ranks.
//!
//! ## Fail-Soft Refresh
//!
//! The remote feed is polled on a fixed period. A fetch that errors or
//! times out retains the previous snapshot — refresh failures are logged,
//! never surfaced to users unless no snapshot has ever been obtained.
//! Snapshot installation is last-write-wins by tick number, so a slow
//! fetch completing after a newer one cannot roll the cache back.

pub mod aggregator;
pub mod chain;
pub mod error;
pub mod merge;
pub mod remote;

pub use aggregator::{LeaderboardAggregator, REFRESH_PERIOD, REFRESH_TIMEOUT};
pub use chain::{ChainReader, ChainScoreSource, DatasetListing};
pub use error::LeaderboardError;
pub use merge::{merge_rows, LeaderboardRow, LEADERBOARD_SIZE};
pub use remote::RemoteScoreSource;
