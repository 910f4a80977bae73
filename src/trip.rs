//! Trip assembly.
//!
//! Runs the route builder, the aggregate calculator and the achievement
//! engine over one photo snapshot and packs the results into a [`Trip`]
//! record for the storage layer.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::{evaluate_at, Achievement, AchievementType};
use crate::error::{OptionExt, Result, TripError};
use crate::route::{build_route, duration, total_distance};
use crate::{sort_chronologically, Photo, RoutePoint};

/// Configuration for trip assembly.
#[derive(Debug, Clone)]
pub struct TripConfig {
    /// strftime pattern applied to the trip's start date to name it.
    /// Default: "Trip %b %-d, %Y" (e.g. "Trip May 4, 2024")
    pub name_format: String,

    /// Drop coordinates outside [-90, 90] / [-180, 180] or non-finite before
    /// building. The photo itself is kept, without a location.
    /// Default: false
    pub require_valid_coordinates: bool,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            name_format: "Trip %b %-d, %Y".to_string(),
            require_valid_coordinates: false,
        }
    }
}

impl TripConfig {
    /// Check the config before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.name_format.trim().is_empty() {
            return Err(TripError::Config {
                message: "name_format is empty".to_string(),
            });
        }
        if StrftimeItems::new(&self.name_format).any(|item| matches!(item, Item::Error)) {
            return Err(TripError::Config {
                message: format!("invalid name_format '{}'", self.name_format),
            });
        }
        Ok(())
    }

    fn trip_name(&self, start: &DateTime<FixedOffset>) -> Result<String> {
        let mut name = String::new();
        write!(name, "{}", start.format(&self.name_format))
            .ok()
            .ok_or_config(&format!("cannot format trip name with '{}'", self.name_format))?;
        Ok(name)
    }
}

/// A trip record, as handed to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Timestamp of the first photo
    pub start_date: DateTime<FixedOffset>,
    /// Timestamp of the last photo
    pub end_date: DateTime<FixedOffset>,
    pub route: Vec<RoutePoint>,
    /// Evaluation order
    pub achievements: Vec<Achievement>,
    pub total_photos: usize,
    /// Kilometers, one decimal
    pub total_distance: f64,
    /// Seconds
    pub duration: i64,
    /// First chronological photo
    pub cover_photo_id: String,
}

/// Everything derived from one photo snapshot.
struct Computed {
    start_date: DateTime<FixedOffset>,
    end_date: DateTime<FixedOffset>,
    route: Vec<RoutePoint>,
    achievements: Vec<Achievement>,
    total_photos: usize,
    total_distance: f64,
    duration: i64,
    cover_photo_id: String,
}

impl Computed {
    fn run(
        photos: &[Photo],
        is_first_trip_ever: bool,
        config: &TripConfig,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        config.validate()?;

        let photos = prepare(photos, config);
        let (first, last) = match (photos.first(), photos.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(TripError::NoPhotos),
        };

        let route = build_route(&photos);
        Ok(Self {
            start_date: first.timestamp,
            end_date: last.timestamp,
            total_distance: total_distance(&route),
            route,
            achievements: evaluate_at(&photos, is_first_trip_ever, now),
            total_photos: photos.len(),
            duration: duration(&photos),
            cover_photo_id: first.id.clone(),
        })
    }
}

/// Sorted copy of the snapshot, with invalid coordinates stripped if asked.
fn prepare(photos: &[Photo], config: &TripConfig) -> Vec<Photo> {
    let mut photos = photos.to_vec();
    if config.require_valid_coordinates {
        for photo in &mut photos {
            if photo.location().is_some_and(|p| !p.is_valid()) {
                photo.latitude = None;
                photo.longitude = None;
                photo.altitude = None;
            }
        }
    }
    sort_chronologically(&mut photos);
    photos
}

impl Trip {
    /// Assemble a trip from a photo snapshot.
    ///
    /// Photos need not be sorted. Fails with [`TripError::NoPhotos`] on
    /// empty input and [`TripError::Config`] on an invalid config.
    pub fn from_photos(
        photos: &[Photo],
        is_first_trip_ever: bool,
        config: &TripConfig,
    ) -> Result<Self> {
        Self::from_photos_at(photos, is_first_trip_ever, config, Utc::now())
    }

    /// [`Trip::from_photos`] with an explicit clock.
    pub fn from_photos_at(
        photos: &[Photo],
        is_first_trip_ever: bool,
        config: &TripConfig,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let computed = Computed::run(photos, is_first_trip_ever, config, now)?;
        let name = config.trip_name(&computed.start_date)?;

        info!(
            "[Trip] Assembled '{}': {} photos, {} route points, {:.1} km, {}s, {} achievements",
            name,
            computed.total_photos,
            computed.route.len(),
            computed.total_distance,
            computed.duration,
            computed.achievements.len()
        );

        let mut trip = Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now,
            updated_at: now,
            start_date: computed.start_date,
            end_date: computed.end_date,
            route: Vec::new(),
            achievements: Vec::new(),
            total_photos: 0,
            total_distance: 0.0,
            duration: 0,
            cover_photo_id: String::new(),
        };
        trip.apply(computed);
        Ok(trip)
    }

    /// Re-run the whole pipeline on a new snapshot.
    ///
    /// Route, aggregates and achievements are replaced, never patched. The
    /// id, name and creation time are kept. On error the trip is unchanged.
    pub fn recompute(
        &mut self,
        photos: &[Photo],
        is_first_trip_ever: bool,
        config: &TripConfig,
    ) -> Result<()> {
        self.recompute_at(photos, is_first_trip_ever, config, Utc::now())
    }

    /// [`Trip::recompute`] with an explicit clock.
    pub fn recompute_at(
        &mut self,
        photos: &[Photo],
        is_first_trip_ever: bool,
        config: &TripConfig,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let computed = Computed::run(photos, is_first_trip_ever, config, now)?;

        info!(
            "[Trip] Recomputed {}: {} -> {} photos, {} achievements",
            self.id,
            self.total_photos,
            computed.total_photos,
            computed.achievements.len()
        );

        self.apply(computed);
        self.updated_at = now;
        Ok(())
    }

    fn apply(&mut self, computed: Computed) {
        self.start_date = computed.start_date;
        self.end_date = computed.end_date;
        self.route = computed.route;
        self.achievements = computed.achievements;
        self.total_photos = computed.total_photos;
        self.total_distance = computed.total_distance;
        self.duration = computed.duration;
        self.cover_photo_id = computed.cover_photo_id;
    }

    /// Whether the trip earned a badge.
    pub fn has_achievement(&self, achievement_type: AchievementType) -> bool {
        self.achievements
            .iter()
            .any(|a| a.achievement_type == achievement_type)
    }

    /// Serialize for storage (camelCase JSON).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Batch assembly
// ============================================================================

/// One trip's worth of input for [`assemble_trips_parallel`].
#[cfg(feature = "parallel")]
#[derive(Debug, Clone)]
pub struct TripInput {
    pub photos: Vec<Photo>,
    pub is_first_trip_ever: bool,
}

/// Assemble many independent trips on the rayon pool.
///
/// Results keep the input order; each trip fails or succeeds on its own.
#[cfg(feature = "parallel")]
pub fn assemble_trips_parallel(inputs: &[TripInput], config: &TripConfig) -> Vec<Result<Trip>> {
    use rayon::prelude::*;

    let now = Utc::now();
    let trips: Vec<Result<Trip>> = inputs
        .par_iter()
        .map(|input| Trip::from_photos_at(&input.photos, input.is_first_trip_ever, config, now))
        .collect();

    info!(
        "[Trip] Batch assembled {} trips ({} failed)",
        trips.len(),
        trips.iter().filter(|t| t.is_err()).count()
    );
    trips
}
