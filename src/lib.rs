//! # Trip Recorder
//!
//! Turns a set of timestamped, geotagged photos into a trip record.
//!
//! This library provides:
//! - Route building from the photos that carry coordinates
//! - Trip aggregates (distance, duration, playback distance)
//! - A rule-based achievement engine with a static badge catalog
//! - Trip assembly for the storage layer
//!
//! ## Features
//!
//! - **`parallel`** - Assemble many independent trips with rayon
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::DateTime;
//! use trip_recorder::{Photo, Trip, TripConfig};
//!
//! let photos = vec![
//!     Photo::new("p1", DateTime::parse_from_rfc3339("2024-05-04T09:00:00+02:00").unwrap())
//!         .with_location(48.8566, 2.3522),
//!     Photo::new("p2", DateTime::parse_from_rfc3339("2024-05-04T11:30:00+02:00").unwrap())
//!         .with_location(48.8606, 2.3376),
//! ];
//!
//! let trip = Trip::from_photos(&photos, true, &TripConfig::default()).unwrap();
//! assert_eq!(trip.total_photos, 2);
//! assert_eq!(trip.cover_photo_id, "p1");
//! println!("{}: {:.1} km, {} badges", trip.name, trip.total_distance, trip.achievements.len());
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, TripError};

// Geographic utilities (haversine distance, regions)
pub mod geo_utils;

// Integer classifiers used by the count badges
pub mod numeric;

// Route building and trip aggregates
pub mod route;
pub use route::{build_route, cumulative_distance, duration, total_distance};

// Achievement engine and static catalog
pub mod achievements;
pub use achievements::{
    evaluate, evaluate_at, Achievement, AchievementInfo, AchievementType, Category, Metadata,
    Rarity,
};

// Trip assembly
pub mod trip;
#[cfg(feature = "parallel")]
pub use trip::{assemble_trips_parallel, TripInput};
pub use trip::{Trip, TripConfig};

// Algorithm toolbox - flat access to the pure functions
pub mod algorithms;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use trip_recorder::GpsPoint;
/// let point = GpsPoint::new(35.6762, 139.6503); // Tokyo
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// A processed photo, as handed over by the image pipeline.
///
/// The timestamp keeps the offset the photo was taken in, so hour-of-day,
/// calendar date and weekday are all evaluated in the photographer's local
/// time. Latitude and longitude only count when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Opaque unique identifier
    pub id: String,
    /// Capture time with its local offset
    pub timestamp: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Altitude in meters (only meaningful with coordinates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Photo {
    /// Create a photo without location data.
    pub fn new(id: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            latitude: None,
            longitude: None,
            altitude: None,
        }
    }

    /// Attach coordinates.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Attach an altitude in meters.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// The photo's coordinates, if both latitude and longitude are present.
    pub fn location(&self) -> Option<GpsPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GpsPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// Whether the photo carries a full coordinate pair.
    pub fn has_location(&self) -> bool {
        self.location().is_some()
    }

    /// Altitude, only reported for photos that also have coordinates.
    pub fn located_altitude(&self) -> Option<f64> {
        self.location().and(self.altitude)
    }
}

/// A timestamped coordinate derived from a geotagged photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
}

impl RoutePoint {
    /// The point's coordinates.
    pub fn point(&self) -> GpsPoint {
        GpsPoint::new(self.lat, self.lng)
    }
}

/// Stable chronological sort; photos sharing a timestamp keep their order.
pub fn sort_chronologically(photos: &mut [Photo]) {
    photos.sort_by_key(|p| p.timestamp);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_gps_point_validation() {
        assert!(GpsPoint::new(51.5074, -0.1278).is_valid());
        assert!(!GpsPoint::new(91.0, 0.0).is_valid());
        assert!(!GpsPoint::new(0.0, 181.0).is_valid());
        assert!(!GpsPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_half_coordinates_are_not_a_location() {
        let mut photo = Photo::new("a", at("2024-01-01T10:00:00Z"));
        photo.latitude = Some(10.0);
        photo.altitude = Some(1200.0);

        assert!(!photo.has_location());
        assert_eq!(photo.located_altitude(), None);

        let photo = photo.with_location(10.0, 20.0);
        assert_eq!(photo.location(), Some(GpsPoint::new(10.0, 20.0)));
        assert_eq!(photo.located_altitude(), Some(1200.0));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut photos = vec![
            Photo::new("late", at("2024-01-01T12:00:00Z")),
            Photo::new("tie-1", at("2024-01-01T10:00:00Z")),
            Photo::new("tie-2", at("2024-01-01T10:00:00Z")),
            Photo::new("early", at("2024-01-01T08:00:00Z")),
        ];
        sort_chronologically(&mut photos);

        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "tie-1", "tie-2", "late"]);
    }

    #[test]
    fn test_sort_compares_instants_across_offsets() {
        // 09:00+02:00 is 07:00Z, earlier than 08:00Z
        let mut photos = vec![
            Photo::new("utc", at("2024-01-01T08:00:00Z")),
            Photo::new("cest", at("2024-01-01T09:00:00+02:00")),
        ];
        sort_chronologically(&mut photos);
        assert_eq!(photos[0].id, "cest");
    }

    #[test]
    fn test_photo_json_shape() {
        let json = r#"{"id":"p1","timestamp":"2024-03-01T10:00:00+09:00","latitude":35.0,"longitude":139.0}"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.location(), Some(GpsPoint::new(35.0, 139.0)));
        assert_eq!(photo.altitude, None);

        let out = serde_json::to_value(&photo).unwrap();
        assert!(out.get("altitude").is_none());
    }
}
