//! # Leaderboard Merge
//!
//! The pure merge of local and remote score rows. Dedup key is the
//! address; when both sides report the same address the merged value is
//! the **maximum** of the two, never the sum — the remote feed may already
//! reflect chain-derived activity that also exists locally, and summing
//! would double-count it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dmk_core::Address;

/// Rows returned by an aggregation request.
pub const LEADERBOARD_SIZE: usize = 10;

/// One leaderboard row. Derived, recomputed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// The participant's address (or the local `"you"` sentinel).
    pub address: Address,
    /// The participant's points.
    pub points: u64,
}

/// Merge the local entry with remote entries into a ranked top list.
///
/// Order-independent: duplicates anywhere in the input collapse to the
/// maximum points per address. Rows sort by points descending with address
/// ascending as the deterministic tie-break, truncated to
/// [`LEADERBOARD_SIZE`].
pub fn merge_rows(local: LeaderboardRow, remote: &[LeaderboardRow]) -> Vec<LeaderboardRow> {
    let mut by_address: BTreeMap<Address, u64> = BTreeMap::new();
    by_address.insert(local.address, local.points);
    for row in remote {
        by_address
            .entry(row.address.clone())
            .and_modify(|points| *points = (*points).max(row.points))
            .or_insert(row.points);
    }

    let mut rows: Vec<LeaderboardRow> = by_address
        .into_iter()
        .map(|(address, points)| LeaderboardRow { address, points })
        .collect();
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.address.cmp(&b.address))
    });
    rows.truncate(LEADERBOARD_SIZE);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(address: &str, points: u64) -> LeaderboardRow {
        LeaderboardRow {
            address: Address::new(address).unwrap(),
            points,
        }
    }

    #[test]
    fn max_merge_never_sums() {
        let merged = merge_rows(row("you", 120), &[row("you", 80), row("alice", 200)]);
        assert_eq!(merged, vec![row("alice", 200), row("you", 120)]);
    }

    #[test]
    fn remote_higher_score_wins_for_own_address() {
        let merged = merge_rows(row("you", 50), &[row("you", 300)]);
        assert_eq!(merged, vec![row("you", 300)]);
    }

    #[test]
    fn duplicate_remote_rows_collapse_to_max() {
        let merged = merge_rows(row("you", 1), &[row("bob", 10), row("bob", 40), row("bob", 20)]);
        assert_eq!(merged[0], row("bob", 40));
    }

    #[test]
    fn result_is_truncated_to_ten() {
        let remote: Vec<LeaderboardRow> =
            (0..30).map(|i| row(&format!("addr{i:02}"), i)).collect();
        let merged = merge_rows(row("you", 1000), &remote);
        assert_eq!(merged.len(), LEADERBOARD_SIZE);
        assert_eq!(merged[0], row("you", 1000));
    }

    #[test]
    fn ties_break_by_address_for_determinism() {
        let merged = merge_rows(row("you", 10), &[row("aaa", 10), row("zzz", 10)]);
        assert_eq!(merged, vec![row("aaa", 10), row("you", 10), row("zzz", 10)]);
    }

    proptest! {
        /// Remote row order never changes the merged result.
        #[test]
        fn merge_is_order_independent(
            points in proptest::collection::vec(0u64..10_000, 0..20),
            local_points in 0u64..10_000,
        ) {
            let remote: Vec<LeaderboardRow> = points
                .iter()
                .enumerate()
                .map(|(i, &p)| row(&format!("addr{}", i % 7), p))
                .collect();
            let mut reversed = remote.clone();
            reversed.reverse();

            let a = merge_rows(row("you", local_points), &remote);
            let b = merge_rows(row("you", local_points), &reversed);
            prop_assert_eq!(a, b);
        }

        /// Every merged row's points equal the max over its address's inputs.
        #[test]
        fn merged_points_are_maxima(
            points in proptest::collection::vec(0u64..10_000, 1..20),
        ) {
            let remote: Vec<LeaderboardRow> = points
                .iter()
                .enumerate()
                .map(|(i, &p)| row(&format!("addr{}", i % 3), p))
                .collect();
            let merged = merge_rows(row("you", 0), &remote);
            for r in &merged {
                if r.address.as_str() == "you" {
                    continue;
                }
                let max_in = remote
                    .iter()
                    .filter(|x| x.address == r.address)
                    .map(|x| x.points)
                    .max()
                    .unwrap();
                prop_assert_eq!(r.points, max_in);
            }
        }
    }
}
