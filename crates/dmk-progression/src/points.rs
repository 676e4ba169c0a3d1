//! # Point Computation
//!
//! The single scoring formula for farmed datasets, plus the listing and
//! sale bonuses. Everything here is a pure function over its arguments —
//! the same metrics always score the same points, which is what makes
//! progression state replayable.
//!
//! More demanding data earns more: active tracking sessions, broad site
//! coverage, high interaction volume, and richer metric coverage all add
//! tiers, and the quality multiplier scales the whole total at the end.

use dmk_core::TokenAmount;

use crate::metrics::{DataMetrics, DataQuality};

/// The floor applied to every credential issuance score.
pub const MIN_DATA_POINTS: u64 = 10;

/// Compute the points earned by issuing a credential over a dataset.
///
/// Deterministic, side-effect free, integer arithmetic only. The quality
/// multiplier is applied to the full running total and the result never
/// falls below [`MIN_DATA_POINTS`].
pub fn compute_data_points(metrics: &DataMetrics) -> u64 {
    // Base points for issuing a credential at all.
    let mut points: u64 = 50;

    // Real-time tracking — the most demanding collection mode.
    if let Some(secs) = metrics.tracking_duration_secs {
        if secs > 0 {
            // 5 points per tracked minute, 1 point per 10 interactions.
            points += ((secs / 60) * 5).min(100);
            points += (metrics.total_interactions / 10).min(100);
        }
    }

    // Site coverage tiers.
    if metrics.site_count > 0 {
        points += match metrics.site_count {
            20.. => 150,
            10..=19 => 100,
            5..=9 => 50,
            _ => 25,
        };
    }

    // Interaction volume tiers.
    if metrics.has_interaction_data && metrics.total_interactions > 0 {
        points += match metrics.total_interactions {
            1000.. => 100,
            500..=999 => 60,
            100..=499 => 30,
            _ => 10,
        };
    }

    // Metric coverage.
    if metrics.has_performance_metrics {
        points += 40;
    }
    if metrics.has_device_specs {
        points += 30;
    }
    if metrics.has_network_data {
        points += 25;
    }

    // Browsing depth: 1 point per 10 resources.
    if metrics.resources_loaded > 0 {
        points += (metrics.resources_loaded / 10).min(50);
    }

    // Domain diversity tiers.
    if metrics.unique_domains > 0 {
        points += match metrics.unique_domains {
            10.. => 60,
            5..=9 => 30,
            _ => 15,
        };
    }

    // Time coverage: 20 points per hour.
    if metrics.total_time_spent_secs > 0 {
        points += (metrics.total_time_spent_secs / 180).min(100);
    }

    // Dataset size bonus.
    if let Some(bytes) = metrics.data_size_bytes {
        if bytes >= 1_048_576 {
            points += 50;
        } else if bytes >= 524_288 {
            points += 25;
        }
    }

    // Quality multiplier over the running total (floor division).
    points = match metrics.data_quality {
        DataQuality::Premium => points * 3 / 2,
        DataQuality::Standard => points * 6 / 5,
        DataQuality::Basic => points,
    };

    points.max(MIN_DATA_POINTS)
}

/// Points for listing a dataset on the marketplace.
///
/// Higher-priced listings indicate more valuable data.
pub fn listing_points(price: TokenAmount) -> u64 {
    match price.as_milli() {
        1000.. => 100,
        500..=999 => 60,
        100..=499 => 30,
        _ => 15,
    }
}

/// Points for a completed sale: 200 points per whole token, pro-rated.
pub fn sale_points(price: TokenAmount) -> u64 {
    price.as_milli() / 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base_metrics() -> DataMetrics {
        DataMetrics::default()
    }

    #[test]
    fn empty_metrics_score_the_base() {
        // Base 50, basic quality, nothing else.
        assert_eq!(compute_data_points(&base_metrics()), 50);
    }

    #[test]
    fn minimum_is_enforced() {
        // The base alone already exceeds the floor; the floor still holds
        // as a formula invariant.
        assert!(compute_data_points(&base_metrics()) >= MIN_DATA_POINTS);
    }

    #[test]
    fn site_count_tiers() {
        let score = |n| {
            compute_data_points(&DataMetrics {
                site_count: n,
                ..base_metrics()
            })
        };
        assert_eq!(score(1), 75);
        assert_eq!(score(5), 100);
        assert_eq!(score(10), 150);
        assert_eq!(score(20), 200);
    }

    #[test]
    fn interaction_bonus_requires_interaction_flag() {
        let without_flag = DataMetrics {
            total_interactions: 1500,
            ..base_metrics()
        };
        let with_flag = DataMetrics {
            has_interaction_data: true,
            ..without_flag.clone()
        };
        assert_eq!(compute_data_points(&without_flag), 50);
        assert_eq!(compute_data_points(&with_flag), 150);
    }

    #[test]
    fn tracking_session_caps() {
        let m = DataMetrics {
            tracking_duration_secs: Some(3 * 3600), // 180 min → capped at 100
            total_interactions: 5000,               // 500 → capped at 100
            ..base_metrics()
        };
        assert_eq!(compute_data_points(&m), 50 + 100 + 100);
    }

    #[test]
    fn time_spent_is_twenty_points_per_hour_capped() {
        let one_hour = DataMetrics {
            total_time_spent_secs: 3600,
            ..base_metrics()
        };
        assert_eq!(compute_data_points(&one_hour), 70);

        let ten_hours = DataMetrics {
            total_time_spent_secs: 36_000,
            ..base_metrics()
        };
        assert_eq!(compute_data_points(&ten_hours), 150);
    }

    #[test]
    fn data_size_thresholds() {
        let half_mb = DataMetrics {
            data_size_bytes: Some(524_288),
            ..base_metrics()
        };
        let one_mb = DataMetrics {
            data_size_bytes: Some(1_048_576),
            ..base_metrics()
        };
        let tiny = DataMetrics {
            data_size_bytes: Some(1000),
            ..base_metrics()
        };
        assert_eq!(compute_data_points(&half_mb), 75);
        assert_eq!(compute_data_points(&one_mb), 100);
        assert_eq!(compute_data_points(&tiny), 50);
    }

    #[test]
    fn quality_multiplier_scales_the_full_total() {
        let basic = DataMetrics {
            site_count: 10,
            total_time_spent_secs: 3600,
            data_size_bytes: Some(2_000_000),
            ..base_metrics()
        };
        let premium = DataMetrics {
            data_quality: DataQuality::Premium,
            ..basic.clone()
        };
        let standard = DataMetrics {
            data_quality: DataQuality::Standard,
            ..basic.clone()
        };
        let s = compute_data_points(&basic);
        assert_eq!(compute_data_points(&premium), s * 3 / 2);
        assert_eq!(compute_data_points(&standard), s * 6 / 5);
    }

    /// The pinned reproducibility fixture: this exact metrics vector must
    /// score the same integer on every implementation.
    #[test]
    fn pinned_fixture_scores_652() {
        let m = DataMetrics {
            site_count: 25,
            total_interactions: 1200,
            total_time_spent_secs: 3700,
            tracking_duration_secs: None,
            resources_loaded: 100,
            unique_domains: 12,
            data_quality: DataQuality::Premium,
            has_performance_metrics: true,
            has_device_specs: true,
            has_network_data: true,
            has_interaction_data: false,
            data_size_bytes: Some(2_000_000),
        };
        assert_eq!(compute_data_points(&m), 652);
    }

    #[test]
    fn listing_points_tiers() {
        assert_eq!(listing_points(TokenAmount::from_whole(2)), 100);
        assert_eq!(listing_points(TokenAmount::from_whole(1)), 100);
        assert_eq!(listing_points(TokenAmount::from_milli(500)), 60);
        assert_eq!(listing_points(TokenAmount::from_milli(100)), 30);
        assert_eq!(listing_points(TokenAmount::from_milli(99)), 15);
        assert_eq!(listing_points(TokenAmount::ZERO), 15);
    }

    #[test]
    fn sale_points_are_two_hundred_per_token() {
        assert_eq!(sale_points(TokenAmount::from_whole(1)), 200);
        assert_eq!(sale_points(TokenAmount::from_milli(2500)), 500);
        // floor(0.055 * 200) = 11
        assert_eq!(sale_points(TokenAmount::from_milli(55)), 11);
    }

    proptest! {
        /// Purity: the same metrics always score the same points.
        #[test]
        fn scoring_is_deterministic(
            site_count in 0u32..100,
            interactions in 0u64..10_000,
            time in 0u64..100_000,
            resources in 0u64..2_000,
            domains in 0u32..50,
        ) {
            let m = DataMetrics {
                site_count,
                total_interactions: interactions,
                total_time_spent_secs: time,
                resources_loaded: resources,
                unique_domains: domains,
                has_interaction_data: interactions % 2 == 0,
                ..DataMetrics::default()
            };
            prop_assert_eq!(compute_data_points(&m), compute_data_points(&m.clone()));
            prop_assert!(compute_data_points(&m) >= MIN_DATA_POINTS);
        }

        /// Premium scores at least 1.5× basic, modulo floor rounding.
        #[test]
        fn premium_is_at_least_one_and_a_half_times_basic(
            site_count in 0u32..100,
            interactions in 0u64..10_000,
            time in 0u64..100_000,
            tracking in proptest::option::of(0u64..50_000),
            resources in 0u64..2_000,
            domains in 0u32..50,
            size in proptest::option::of(0u64..5_000_000),
            perf in any::<bool>(),
            dev in any::<bool>(),
            net in any::<bool>(),
            inter in any::<bool>(),
        ) {
            let basic = DataMetrics {
                site_count,
                total_interactions: interactions,
                total_time_spent_secs: time,
                tracking_duration_secs: tracking,
                resources_loaded: resources,
                unique_domains: domains,
                data_quality: DataQuality::Basic,
                has_performance_metrics: perf,
                has_device_specs: dev,
                has_network_data: net,
                has_interaction_data: inter,
                data_size_bytes: size,
            };
            let premium = DataMetrics {
                data_quality: DataQuality::Premium,
                ..basic.clone()
            };
            let b = compute_data_points(&basic);
            let p = compute_data_points(&premium);
            // p = floor(3b/2), so 2p is within 1 of 3b.
            prop_assert!(p * 2 + 1 >= b * 3);
        }
    }
}
