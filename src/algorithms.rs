//! # Algorithm Toolbox
//!
//! Direct access to the pure functions behind trip assembly. Use these to
//! compute a route, an aggregate or a badge set without building a full
//! [`Trip`](crate::Trip).
//!
//! ## Core Algorithms
//!
//! - **Route Building**: photos with coordinates to an ordered route
//! - **Aggregates**: distance, duration, playback distance
//! - **Achievement Evaluation**: rule table over a photo set
//!
//! ## Geographic Utilities
//!
//! - **Haversine Distance**: Great-circle distance between GPS points
//! - **Polyline Length**: Total distance along a path
//! - **Regions**: Coarse continent classification
//!
//! # Example
//!
//! ```rust
//! use chrono::DateTime;
//! use trip_recorder::algorithms::{build_route, total_distance, distance_km, GpsPoint, Photo};
//!
//! let london = GpsPoint::new(51.5074, -0.1278);
//! let paris = GpsPoint::new(48.8566, 2.3522);
//! println!("London to Paris: {:.0} km", distance_km(&london, &paris));
//!
//! let ts = |s| DateTime::parse_from_rfc3339(s).unwrap();
//! let photos = vec![
//!     Photo::new("a", ts("2024-01-01T10:00:00Z")).with_location(51.5074, -0.1278),
//!     Photo::new("b", ts("2024-01-01T13:00:00Z")).with_location(48.8566, 2.3522),
//! ];
//! let km = total_distance(&build_route(&photos));
//! assert!((km - 343.5).abs() < 5.0);
//! ```

// =============================================================================
// Core Types (re-exported from lib)
// =============================================================================

pub use crate::{GpsPoint, Photo, RoutePoint};

// =============================================================================
// Geographic Utilities
// =============================================================================

pub use crate::geo_utils::{
    distance_km, haversine_distance_km, meters_to_degrees, polyline_length_km, region_of, Region,
};

// =============================================================================
// Route & Aggregates
// =============================================================================

/// Project geotagged photos into a chronological route.
///
/// Photos missing either coordinate are skipped; ties keep input order.
pub use crate::route::build_route;

/// Route length in km, rounded to one decimal.
pub use crate::route::total_distance;

/// Latest minus earliest timestamp, in seconds.
pub use crate::route::duration;

/// Unrounded distance up to an index, for progressive playback.
pub use crate::route::cumulative_distance;

pub use crate::route::round_to_tenth;

pub use crate::sort_chronologically;

// =============================================================================
// Achievements
// =============================================================================

/// Evaluate a photo set into badges, in catalog order.
///
/// Deterministic apart from the generated ids and the unlock time; use
/// [`evaluate_at`] to pin the clock.
pub use crate::achievements::evaluate;

pub use crate::achievements::evaluate_at;

/// Precomputed quantities (segments, local hours, dates) the rules read.
pub use crate::achievements::TripFacts;

pub use crate::achievements::{lookup, Achievement, AchievementInfo, AchievementType};

// =============================================================================
// Numeric Classifiers
// =============================================================================

pub use crate::numeric::{is_fibonacci, is_palindrome, is_prime};
