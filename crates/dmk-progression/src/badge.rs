//! # Badges
//!
//! One-time achievement markers tied to threshold conditions. The id set is
//! closed — every `match` on [`BadgeId`] is exhaustive, so adding a badge
//! is a compile error until the award logic and catalog handle it.

use serde::{Deserialize, Serialize};

/// The closed set of badge identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeId {
    /// Earned 100 cumulative points.
    #[serde(rename = "starter-100")]
    Starter100,
    /// Earned 500 cumulative points.
    #[serde(rename = "grinder-500")]
    Grinder500,
    /// Earned 1000 cumulative points.
    #[serde(rename = "master-1000")]
    Master1000,
    /// Issued credentials 7 days in a row.
    #[serde(rename = "streak-7")]
    Streak7,
    /// Collected data from 20 or more sites in one dataset.
    #[serde(rename = "explorer-20")]
    Explorer20,
    /// Tracked 1000 or more interactions in one dataset.
    #[serde(rename = "interactive-1000")]
    Interactive1000,
}

impl BadgeId {
    /// All badge ids, in award-evaluation order.
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::Starter100,
            Self::Grinder500,
            Self::Master1000,
            Self::Streak7,
            Self::Explorer20,
            Self::Interactive1000,
        ]
    }

    /// The badge's kebab-case id string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter100 => "starter-100",
            Self::Grinder500 => "grinder-500",
            Self::Master1000 => "master-1000",
            Self::Streak7 => "streak-7",
            Self::Explorer20 => "explorer-20",
            Self::Interactive1000 => "interactive-1000",
        }
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalog metadata for a badge.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    /// The badge id.
    pub id: BadgeId,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
}

/// The static badge catalog.
pub fn badge_catalog(id: BadgeId) -> Badge {
    let (name, description) = match id {
        BadgeId::Starter100 => ("Starter", "Earned 100 points"),
        BadgeId::Grinder500 => ("Grinder", "Earned 500 points"),
        BadgeId::Master1000 => ("Master Farmer", "Earned 1000 points"),
        BadgeId::Streak7 => ("7-Day Streak", "Issued credentials 7 days in a row"),
        BadgeId::Explorer20 => ("Explorer", "Collected data from 20+ sites"),
        BadgeId::Interactive1000 => ("Highly Interactive", "1000+ interactions tracked"),
    };
    Badge {
        id,
        name,
        description,
    }
}
