//! # Temporal Types
//!
//! UTC-only timestamp type for the engine. All timestamps are stored in UTC
//! with second-level precision and a `Z` suffix in serialized form.
//!
//! ## Design Decision
//!
//! Streak accounting is defined over UTC calendar days. Using the viewer's
//! local timezone would make "same day" depend on where the process runs and
//! break replay consistency, so day boundaries are fixed to UTC and local
//! rendering is a presentation concern.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp with second-level precision.
///
/// Serializes to ISO 8601 format with `Z` suffix (e.g., `2026-01-15T12:00:00Z`).
/// Subsecond precision is truncated during canonicalization to ensure
/// deterministic digest computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The UTC calendar date of this timestamp.
    pub fn utc_date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Whether `self` and `other` fall on the same UTC calendar day.
    pub fn same_utc_day(&self, other: &Timestamp) -> bool {
        self.utc_date() == other.utc_date()
    }

    /// Whether `self` falls on the UTC calendar day immediately before
    /// `other` — the streak-continuation predicate.
    pub fn is_day_before(&self, other: &Timestamp) -> bool {
        match self.utc_date().checked_add_days(Days::new(1)) {
            Some(next) => next == other.utc_date(),
            None => false,
        }
    }

    /// Return the timestamp as an ISO 8601 string with Z suffix,
    /// truncated to seconds (matching canonicalization rules).
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
