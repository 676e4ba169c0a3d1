//! # Progression State
//!
//! The per-user progression record and the outcome shapes returned by the
//! ledger's recording operations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dmk_core::{Timestamp, TokenAmount};

use crate::badge::BadgeId;

/// How many activity entries are retained per user.
pub const ACTIVITY_CAP: usize = 20;

/// A listing or sale event in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Content id of the dataset.
    pub cid: String,
    /// Listing or sale price.
    pub price: TokenAmount,
    /// When the event was recorded.
    pub timestamp: Timestamp,
}

/// One entry in a user's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Human-facing description of the action.
    pub action: String,
    /// Points awarded for the action.
    pub points: u64,
    /// When the action happened.
    pub timestamp: Timestamp,
}

/// Per-user progression state.
///
/// Created zeroed on first use and mutated only through
/// [`ProgressionLedger`](crate::ledger::ProgressionLedger) operations.
/// `points` and the badge set never decrease; listings and sales are
/// append-only. The activity feed keeps the [`ACTIVITY_CAP`] most recent
/// entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Cumulative points. Monotonically non-decreasing.
    pub points: u64,
    /// Consecutive UTC calendar days with at least one issuance.
    pub daily_streak: u32,
    /// When the user last issued a credential, if ever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_issued_at: Option<Timestamp>,
    /// Badges earned so far. Grows monotonically; each id at most once.
    pub badges: BTreeSet<BadgeId>,
    /// Datasets listed on the marketplace. Append-only.
    pub listings: Vec<TradeRecord>,
    /// Datasets sold. Append-only.
    pub sales: Vec<TradeRecord>,
    /// The most recent activity entries, newest last.
    pub recent_activity: Vec<ActivityEntry>,
}

impl ProgressionState {
    /// Append to the activity feed, dropping the oldest entry past the cap.
    pub(crate) fn push_activity(&mut self, entry: ActivityEntry) {
        self.recent_activity.push(entry);
        if self.recent_activity.len() > ACTIVITY_CAP {
            let overflow = self.recent_activity.len() - ACTIVITY_CAP;
            self.recent_activity.drain(..overflow);
        }
    }
}

/// The outcome of recording a credential issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceOutcome {
    /// Points computed from the dataset metrics.
    pub data_points: u64,
    /// Streak bonus applied (from the pre-issuance streak).
    pub streak_bonus: u64,
    /// Cumulative points after the award.
    pub points: u64,
    /// Streak after the award.
    pub daily_streak: u32,
    /// Badges newly earned by this issuance, in evaluation order.
    pub new_badges: Vec<BadgeId>,
}

/// The outcome of recording a listing or sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOutcome {
    /// Points awarded by this event.
    pub points_awarded: u64,
    /// Cumulative points after the award.
    pub points: u64,
}
