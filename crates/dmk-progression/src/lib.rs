#![deny(missing_docs)]

//! # dmk-progression — Scoring & Progression Engine
//!
//! Computes points from data-quality metrics, maintains daily streaks,
//! unlocks badges, and records marketplace activity per user.
//!
//! ## Invariants
//!
//! - [`compute_data_points`] is a pure function: no hidden state, integer
//!   arithmetic only, deterministic and reproducible byte-for-byte.
//! - `points` and the badge set of a [`ProgressionState`] are monotonically
//!   non-decreasing; listings and sales are append-only.
//! - Two issuances on the same UTC calendar day add points twice but
//!   advance the streak at most once.
//! - Each badge is awarded at most once — idempotent set insertion keyed
//!   by badge id.
//!
//! Mutations to one user's state serialize under that user's map entry
//! lock, so concurrent recorders cannot double-bump a streak or lose a
//! points update.

pub mod badge;
pub mod ledger;
pub mod metrics;
pub mod points;
pub mod state;

pub use badge::{badge_catalog, Badge, BadgeId};
pub use ledger::ProgressionLedger;
pub use metrics::{DataMetrics, DataQuality};
pub use points::{compute_data_points, listing_points, sale_points, MIN_DATA_POINTS};
pub use state::{ActivityEntry, IssuanceOutcome, MarketOutcome, ProgressionState, TradeRecord};
