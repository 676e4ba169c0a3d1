//! # Data Metrics
//!
//! The numeric/boolean summary of a farmed dataset. Produced by the
//! data-collection layer; the scoring engine only consumes it.

use serde::{Deserialize, Serialize};

/// The quality tier assigned to a dataset by the collection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    /// Highest tier — scores are scaled by 1.5.
    Premium,
    /// Middle tier — scores are scaled by 1.2.
    Standard,
    /// Base tier — no scaling.
    #[default]
    Basic,
}

/// Summary metrics of a farmed dataset.
///
/// All counters are totals over the dataset; durations are in seconds and
/// sizes in bytes. Optional fields are absent when the collection mode did
/// not produce them (e.g. `tracking_duration_secs` only exists for
/// real-time tracking sessions).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataMetrics {
    /// Number of distinct sites captured.
    pub site_count: u32,
    /// Total user interactions (clicks, scrolls, keypresses).
    pub total_interactions: u64,
    /// Total time represented by the dataset, in seconds.
    pub total_time_spent_secs: u64,
    /// Duration of an active real-time tracking session, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_duration_secs: Option<u64>,
    /// Number of resources loaded across the dataset.
    pub resources_loaded: u64,
    /// Number of unique domains visited.
    pub unique_domains: u32,
    /// Quality tier assigned by the collection layer.
    pub data_quality: DataQuality,
    /// Whether performance metrics are present.
    pub has_performance_metrics: bool,
    /// Whether device specifications are present.
    pub has_device_specs: bool,
    /// Whether network data is present.
    pub has_network_data: bool,
    /// Whether interaction data is present.
    pub has_interaction_data: bool,
    /// Dataset size in bytes, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_size_bytes: Option<u64>,
}
