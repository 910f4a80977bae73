//! Achievement evaluation.
//!
//! Inspects a photo set's temporal, spatial and counting properties and
//! emits the badges it earns.
//!
//! ## Features
//! - Movement badges (segment speeds, distance, altitude)
//! - Time-of-day and day-of-week badges in each photo's local time
//! - Day span and duration buckets
//! - Photo count and shooting behaviour badges
//! - Geography badges (regions, equator, meridians, polar circles)
//! - Calendar and numeric curiosities
//!
//! ## Example
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use trip_recorder::{evaluate_at, AchievementType, Photo};
//!
//! let photos = vec![Photo::new(
//!     "only",
//!     DateTime::parse_from_rfc3339("2024-12-25T09:00:00+01:00").unwrap(),
//! )];
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let earned = evaluate_at(&photos, true, now);
//! let types: Vec<_> = earned.iter().map(|a| a.achievement_type).collect();
//! assert!(types.contains(&AchievementType::OneShot));
//! assert!(types.contains(&AchievementType::Christmas));
//! assert!(types.contains(&AchievementType::FirstTimer));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Photo;

pub mod catalog;
pub mod facts;
mod rules;

pub use catalog::{lookup, AchievementInfo, AchievementType, Category, Rarity};
pub use facts::TripFacts;

use rules::{RuleContext, RULES};

/// Diagnostic values attached to an earned badge (speed, gap, regions).
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// One earned badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Unique per instance (UUID v4)
    pub id: String,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub unlocked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Achievement {
    /// Stamp a fresh badge. Empty metadata is stored as `None`.
    pub fn unlock(
        achievement_type: AchievementType,
        unlocked_at: DateTime<Utc>,
        metadata: Metadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            achievement_type,
            unlocked_at,
            metadata: (!metadata.is_empty()).then_some(metadata),
        }
    }

    /// Display data from the static catalog.
    pub fn info(&self) -> &'static AchievementInfo {
        self.achievement_type.info()
    }
}

/// Evaluate a photo set, stamping badges with the current time.
///
/// See [`evaluate_at`].
pub fn evaluate(photos: &[Photo], is_first_trip_ever: bool) -> Vec<Achievement> {
    evaluate_at(photos, is_first_trip_ever, Utc::now())
}

/// Evaluate a photo set with an explicit unlock time.
///
/// Returns at most one achievement per type, in catalog order. Input order
/// does not matter. Empty input earns nothing, first trip or not.
pub fn evaluate_at(
    photos: &[Photo],
    is_first_trip_ever: bool,
    unlocked_at: DateTime<Utc>,
) -> Vec<Achievement> {
    if photos.is_empty() {
        return Vec::new();
    }

    let facts = TripFacts::new(photos);
    let mut earned: Vec<Achievement> = Vec::new();

    for rule in RULES {
        let ctx = RuleContext {
            facts: &facts,
            is_first_trip: is_first_trip_ever,
            earned: earned.len(),
        };
        if let Some(metadata) = (rule.check)(&ctx) {
            earned.push(Achievement::unlock(rule.achievement_type, unlocked_at, metadata));
        }
    }

    debug!(
        "[Achievements] {} photos ({} located, {:.1} km, {}s) -> {} badges",
        facts.count(),
        facts.located.len(),
        facts.distance_km,
        facts.duration_secs,
        earned.len()
    );

    earned
}
