//! # Progression Ledger
//!
//! The per-user progression state manager. Backed by `DashMap`; every
//! recording operation runs read-validate-update under the address's entry
//! write lock, which is what preserves the same-day streak invariant and
//! prevents lost updates to `points` and `badges` under concurrent
//! recorders for the same user.

use dashmap::DashMap;

use dmk_core::{Address, Timestamp, TokenAmount};

use crate::badge::BadgeId;
use crate::metrics::DataMetrics;
use crate::points::{compute_data_points, listing_points, sale_points};
use crate::state::{ActivityEntry, IssuanceOutcome, MarketOutcome, ProgressionState, TradeRecord};

/// Streak bonus cap: 5 points per streak day, at most 100.
const MAX_STREAK_BONUS: u64 = 100;

/// Per-user progression state, keyed by marketplace address.
///
/// States are created zeroed on first use and never deleted.
pub struct ProgressionLedger {
    sessions: DashMap<Address, ProgressionState>,
}

impl ProgressionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Record a credential issuance for `address` at the current time.
    pub fn record_credential_issued(
        &self,
        address: &Address,
        metrics: &DataMetrics,
    ) -> IssuanceOutcome {
        self.record_credential_issued_at(address, metrics, Timestamp::now())
    }

    /// Record a credential issuance at an explicit time.
    ///
    /// The streak bonus uses the *current* streak, before any advance.
    /// The streak itself advances by one only if `now` is a new UTC
    /// calendar day: a same-day repeat leaves it unchanged, a gap of more
    /// than one day resets it to 1. Badges are evaluated after the points
    /// update and each is awarded at most once.
    pub fn record_credential_issued_at(
        &self,
        address: &Address,
        metrics: &DataMetrics,
        now: Timestamp,
    ) -> IssuanceOutcome {
        let data_points = compute_data_points(metrics);

        let mut entry = self.sessions.entry(address.clone()).or_default();
        let state = entry.value_mut();

        let streak_bonus = (u64::from(state.daily_streak) * 5).min(MAX_STREAK_BONUS);
        let total = data_points + streak_bonus;

        state.daily_streak = match &state.last_issued_at {
            Some(last) if last.same_utc_day(&now) => state.daily_streak,
            Some(last) if last.is_day_before(&now) => state.daily_streak + 1,
            _ => 1,
        };
        state.last_issued_at = Some(now);
        state.points += total;

        state.push_activity(ActivityEntry {
            action: format!("Issued \"{}\" credential", issuance_label(metrics)),
            points: total,
            timestamp: now,
        });

        let new_badges = award_badges(state, metrics);

        tracing::info!(
            address = %address,
            data_points,
            streak_bonus,
            points = state.points,
            streak = state.daily_streak,
            new_badges = new_badges.len(),
            "credential issuance recorded"
        );

        IssuanceOutcome {
            data_points,
            streak_bonus,
            points: state.points,
            daily_streak: state.daily_streak,
            new_badges,
        }
    }

    /// Record a marketplace listing at the current time.
    pub fn record_listing(
        &self,
        address: &Address,
        cid: &str,
        price: TokenAmount,
    ) -> MarketOutcome {
        self.record_listing_at(address, cid, price, Timestamp::now())
    }

    /// Record a marketplace listing at an explicit time.
    pub fn record_listing_at(
        &self,
        address: &Address,
        cid: &str,
        price: TokenAmount,
        now: Timestamp,
    ) -> MarketOutcome {
        let awarded = listing_points(price);
        let mut entry = self.sessions.entry(address.clone()).or_default();
        let state = entry.value_mut();

        state.points += awarded;
        state.listings.push(TradeRecord {
            cid: cid.to_string(),
            price,
            timestamp: now,
        });
        state.push_activity(ActivityEntry {
            action: format!("Listed dataset ({price} tokens)"),
            points: awarded,
            timestamp: now,
        });

        MarketOutcome {
            points_awarded: awarded,
            points: state.points,
        }
    }

    /// Record a completed sale at the current time.
    pub fn record_sale(&self, address: &Address, cid: &str, price: TokenAmount) -> MarketOutcome {
        self.record_sale_at(address, cid, price, Timestamp::now())
    }

    /// Record a completed sale at an explicit time.
    pub fn record_sale_at(
        &self,
        address: &Address,
        cid: &str,
        price: TokenAmount,
        now: Timestamp,
    ) -> MarketOutcome {
        let awarded = sale_points(price);
        let mut entry = self.sessions.entry(address.clone()).or_default();
        let state = entry.value_mut();

        state.points += awarded;
        state.sales.push(TradeRecord {
            cid: cid.to_string(),
            price,
            timestamp: now,
        });
        state.push_activity(ActivityEntry {
            action: format!("Sold dataset ({price} tokens)"),
            points: awarded,
            timestamp: now,
        });

        MarketOutcome {
            points_awarded: awarded,
            points: state.points,
        }
    }

    /// A snapshot of a user's state. Returns the zeroed default for
    /// addresses that have never recorded anything.
    pub fn snapshot(&self, address: &Address) -> ProgressionState {
        self.sessions
            .get(address)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }

    /// The user's current points, for leaderboard aggregation.
    pub fn points(&self, address: &Address) -> u64 {
        self.sessions.get(address).map_or(0, |s| s.points)
    }

    /// Number of tracked users.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no user has recorded anything yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for ProgressionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProgressionLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionLedger")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}

/// Label for the activity feed, derived from the collection mode.
fn issuance_label(metrics: &DataMetrics) -> &'static str {
    if metrics.tracking_duration_secs.is_some_and(|d| d > 0) {
        "Real-Time Tracking"
    } else if metrics.site_count >= 20 {
        "Comprehensive Session"
    } else if metrics.total_interactions >= 1000 {
        "High Interaction Data"
    } else {
        "Standard Dataset"
    }
}

/// Evaluate badge thresholds against the post-update state.
///
/// Insertion into the badge set is the idempotence point: an id already
/// present awards nothing.
fn award_badges(state: &mut ProgressionState, metrics: &DataMetrics) -> Vec<BadgeId> {
    let mut earned = Vec::new();
    for &id in BadgeId::all() {
        let qualifies = match id {
            BadgeId::Starter100 => state.points >= 100,
            BadgeId::Grinder500 => state.points >= 500,
            BadgeId::Master1000 => state.points >= 1000,
            BadgeId::Streak7 => state.daily_streak >= 7,
            BadgeId::Explorer20 => metrics.site_count >= 20,
            BadgeId::Interactive1000 => metrics.total_interactions >= 1000,
        };
        if qualifies && state.badges.insert(id) {
            earned.push(id);
        }
    }
    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DataQuality;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> Timestamp {
        Timestamp::from_datetime(chrono::Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap())
    }

    fn addr() -> Address {
        Address::new("0xabc123").unwrap()
    }

    fn rich_metrics() -> DataMetrics {
        DataMetrics {
            site_count: 25,
            total_interactions: 1200,
            total_time_spent_secs: 3700,
            resources_loaded: 100,
            unique_domains: 12,
            data_quality: DataQuality::Premium,
            has_performance_metrics: true,
            has_device_specs: true,
            has_network_data: true,
            data_size_bytes: Some(2_000_000),
            ..DataMetrics::default()
        }
    }

    #[test]
    fn first_issuance_starts_the_streak() {
        let ledger = ProgressionLedger::new();
        let out = ledger.record_credential_issued_at(&addr(), &rich_metrics(), at(2026, 3, 1, 9));
        assert_eq!(out.daily_streak, 1);
        assert_eq!(out.streak_bonus, 0);
        assert_eq!(out.data_points, 652);
        assert_eq!(out.points, 652);
    }

    #[test]
    fn same_day_issuances_add_points_but_not_streak() {
        let ledger = ProgressionLedger::new();
        let m = rich_metrics();
        let first = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 9));
        let second = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 21));

        assert_eq!(first.daily_streak, 1);
        assert_eq!(second.daily_streak, 1);
        // Second issuance still earns the streak bonus for streak = 1.
        assert_eq!(second.streak_bonus, 5);
        assert_eq!(second.points, first.points + second.data_points + 5);
    }

    #[test]
    fn next_day_issuance_advances_the_streak() {
        let ledger = ProgressionLedger::new();
        let m = rich_metrics();
        ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 9));
        let out = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 2, 9));
        assert_eq!(out.daily_streak, 2);
    }

    #[test]
    fn skipped_day_resets_the_streak() {
        let ledger = ProgressionLedger::new();
        let m = rich_metrics();
        ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 9));
        ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 2, 9));
        let out = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 5, 9));
        assert_eq!(out.daily_streak, 1);
    }

    #[test]
    fn streak_bonus_uses_pre_bump_streak_and_caps() {
        let ledger = ProgressionLedger::new();
        let m = DataMetrics::default();
        // Build a long streak day by day.
        for day in 1..=25 {
            ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, day, 12));
        }
        // Day 26: current streak is 25 → bonus min(100, 125) = 100.
        let out = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 26, 12));
        assert_eq!(out.streak_bonus, 100);
        assert_eq!(out.daily_streak, 26);
    }

    #[test]
    fn points_badges_awarded_once_across_thresholds() {
        let ledger = ProgressionLedger::new();
        let m = rich_metrics(); // 652 points per issuance
        let first = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 9));
        // 652 points: starter-100 + grinder-500, plus both dataset badges.
        assert_eq!(
            first.new_badges,
            vec![
                BadgeId::Starter100,
                BadgeId::Grinder500,
                BadgeId::Explorer20,
                BadgeId::Interactive1000
            ]
        );

        let second = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 10));
        // Crosses 1000 now; earlier badges never repeat.
        assert_eq!(second.new_badges, vec![BadgeId::Master1000]);

        let third = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, 1, 11));
        assert!(third.new_badges.is_empty());
    }

    #[test]
    fn seven_day_streak_earns_the_badge_once() {
        let ledger = ProgressionLedger::new();
        let m = DataMetrics::default();
        let mut all_new = Vec::new();
        for day in 1..=10 {
            let out = ledger.record_credential_issued_at(&addr(), &m, at(2026, 3, day, 12));
            all_new.extend(out.new_badges);
        }
        assert_eq!(
            all_new.iter().filter(|&&b| b == BadgeId::Streak7).count(),
            1
        );
    }

    #[test]
    fn listing_and_sale_append_history_and_points() {
        let ledger = ProgressionLedger::new();
        let a = addr();
        let listed = ledger.record_listing_at(&a, "bafy-1", TokenAmount::from_milli(500), at(2026, 3, 1, 9));
        assert_eq!(listed.points_awarded, 60);

        let sold = ledger.record_sale_at(&a, "bafy-1", TokenAmount::from_whole(2), at(2026, 3, 2, 9));
        assert_eq!(sold.points_awarded, 400);
        assert_eq!(sold.points, 460);

        let state = ledger.snapshot(&a);
        assert_eq!(state.listings.len(), 1);
        assert_eq!(state.sales.len(), 1);
        assert_eq!(state.listings[0].cid, "bafy-1");
        // Listings and sales do not touch the streak.
        assert_eq!(state.daily_streak, 0);
    }

    #[test]
    fn snapshot_of_unknown_address_is_zeroed() {
        let ledger = ProgressionLedger::new();
        let state = ledger.snapshot(&Address::new("0xnobody").unwrap());
        assert_eq!(state.points, 0);
        assert!(state.badges.is_empty());
    }

    #[test]
    fn users_are_isolated() {
        let ledger = ProgressionLedger::new();
        let a = Address::new("0xaaa").unwrap();
        let b = Address::new("0xbbb").unwrap();
        ledger.record_credential_issued_at(&a, &rich_metrics(), at(2026, 3, 1, 9));
        assert_eq!(ledger.points(&a), 652);
        assert_eq!(ledger.points(&b), 0);
    }

    #[test]
    fn concurrent_same_day_issuances_bump_streak_once() {
        use std::sync::Arc;
        let ledger = Arc::new(ProgressionLedger::new());
        let now = at(2026, 3, 1, 12);
        let m = DataMetrics::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                let m = m.clone();
                std::thread::spawn(move || {
                    ledger.record_credential_issued_at(
                        &Address::new("0xabc123").unwrap(),
                        &m,
                        now,
                    )
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let state = ledger.snapshot(&addr());
        assert_eq!(state.daily_streak, 1);
        // All eight awards landed: 8 × (50 data + 0-or-5 bonus). The first
        // issuance has no bonus; the remaining seven earn 5 each.
        assert_eq!(state.points, 8 * 50 + 7 * 5);
    }
}
