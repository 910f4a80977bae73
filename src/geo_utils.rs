//! # Geographic Utilities
//!
//! Core geographic computations used by the route builder and the
//! achievement engine.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance_km`] | Great-circle distance between two coordinate pairs |
//! | [`distance_km`] | The same, on [`GpsPoint`]s |
//! | [`polyline_length_km`] | Total length of a point sequence |
//! | [`meters_to_degrees`] | Upper bound of the degree span of a distance |
//! | [`region_of`] | Broad geographic region of a point |
//!
//! ## Example
//!
//! ```rust
//! use trip_recorder::{GpsPoint, geo_utils};
//!
//! let london = GpsPoint::new(51.5074, -0.1278);
//! let paris = GpsPoint::new(48.8566, 2.3522);
//!
//! let km = geo_utils::distance_km(&london, &paris);
//! assert!((km - 343.5).abs() < 5.0);
//! ```
//!
//! ## Algorithm Notes
//!
//! The haversine formula assumes a spherical Earth of radius 6371 km. It is
//! total: out-of-range degrees produce a defined but meaningless value, so
//! callers only pass real coordinate pairs.

use geo::{coord, Intersects, Rect};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::GpsPoint;

/// Mean Earth radius used by [`haversine_distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// =============================================================================
// Distance Functions
// =============================================================================

/// Great-circle distance in kilometers between two latitude/longitude pairs.
///
/// ```rust
/// use trip_recorder::geo_utils::haversine_distance_km;
///
/// assert_eq!(haversine_distance_km(35.0, 139.0, 35.0, 139.0), 0.0);
/// let one_degree = haversine_distance_km(0.0, 0.0, 1.0, 0.0);
/// assert!((one_degree - 111.19).abs() < 0.01);
/// ```
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers between two GPS points.
#[inline]
pub fn distance_km(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    haversine_distance_km(p1.latitude, p1.longitude, p2.latitude, p2.longitude)
}

/// Total length of a point sequence in kilometers.
///
/// Empty or single-point sequences return 0.0.
pub fn polyline_length_km(points: &[GpsPoint]) -> f64 {
    points.windows(2).map(|w| distance_km(&w[0], &w[1])).sum()
}

/// Convert meters to a degree radius that covers the distance on both axes.
///
/// Uses the shortest length of one degree (latitude near the equator,
/// longitude elsewhere), so a search box of this radius never misses a point
/// that is `meters` away. Near the poles the radius grows large; callers
/// refine candidates with an exact distance.
#[inline]
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    // Slightly under the 110.57 km of one latitude degree at the equator
    const MIN_METERS_PER_DEGREE: f64 = 110_000.0;
    let cos_lat = latitude.to_radians().cos().abs().max(1e-3);
    meters / (MIN_METERS_PER_DEGREE * cos_lat)
}

// =============================================================================
// Regions
// =============================================================================

/// Broad geographic region, used to detect border crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    MiddleEast,
    Africa,
    Asia,
    Oceania,
    Antarctica,
}

/// Region boxes as (lng, lat) corners; the first matching box wins.
static REGION_BOXES: Lazy<Vec<(Region, Rect<f64>)>> = Lazy::new(|| {
    let region = |region: Region,
                  min_lng: f64,
                  min_lat: f64,
                  max_lng: f64,
                  max_lat: f64|
     -> (Region, Rect<f64>) {
        (
            region,
            Rect::new(
                coord! { x: min_lng, y: min_lat },
                coord! { x: max_lng, y: max_lat },
            ),
        )
    };
    vec![
        region(Region::Antarctica, -180.0, -90.0, 180.0, -60.0),
        region(Region::MiddleEast, 34.0, 12.0, 63.0, 42.0),
        region(Region::Europe, -25.0, 36.0, 45.0, 72.0),
        region(Region::Africa, -20.0, -36.0, 52.0, 36.0),
        region(Region::NorthAmerica, -170.0, 7.0, -50.0, 84.0),
        region(Region::SouthAmerica, -92.0, -60.0, -30.0, 7.0),
        region(Region::Oceania, 110.0, -50.0, 180.0, -10.0),
        region(Region::Asia, 25.0, -11.0, 180.0, 82.0),
    ]
});

/// Classify a point into a broad region. Open ocean and unlisted areas
/// return `None`.
pub fn region_of(point: &GpsPoint) -> Option<Region> {
    let c = coord! { x: point.longitude, y: point.latitude };
    REGION_BOXES
        .iter()
        .find(|(_, rect)| rect.intersects(&c))
        .map(|(region, _)| *region)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_distance_km(51.5074, -0.1278, 51.5074, -0.1278), 0.0);
    }

    #[test]
    fn test_haversine_known_value() {
        // London to Paris is approximately 344 km
        let dist = haversine_distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!(approx_eq(dist, 343.5, 5.0));
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = GpsPoint::new(35.6762, 139.6503);
        let b = GpsPoint::new(-33.8688, 151.2093);
        assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
    }

    #[test]
    fn test_polyline_length() {
        assert_eq!(polyline_length_km(&[]), 0.0);
        assert_eq!(polyline_length_km(&[GpsPoint::new(1.0, 1.0)]), 0.0);

        let track = vec![
            GpsPoint::new(0.0, 0.0),
            GpsPoint::new(1.0, 0.0),
            GpsPoint::new(2.0, 0.0),
        ];
        assert!(approx_eq(polyline_length_km(&track), 2.0 * 111.195, 0.01));
    }

    #[test]
    fn test_meters_to_degrees_covers_both_axes() {
        for lat in [0.0, 35.0, 60.0, 80.0] {
            let radius = meters_to_degrees(100.0, lat);
            let north = haversine_distance_km(lat, 10.0, lat + radius, 10.0);
            let east = haversine_distance_km(lat, 10.0, lat, 10.0 + radius);
            assert!(north >= 0.1, "lat {} north {}", lat, north);
            assert!(east >= 0.1, "lat {} east {}", lat, east);
        }
    }

    #[test]
    fn test_region_of() {
        assert_eq!(region_of(&GpsPoint::new(48.8566, 2.3522)), Some(Region::Europe));
        assert_eq!(region_of(&GpsPoint::new(40.7128, -74.0060)), Some(Region::NorthAmerica));
        assert_eq!(region_of(&GpsPoint::new(-22.9068, -43.1729)), Some(Region::SouthAmerica));
        assert_eq!(region_of(&GpsPoint::new(30.0444, 31.2357)), Some(Region::Africa));
        assert_eq!(region_of(&GpsPoint::new(25.2048, 55.2708)), Some(Region::MiddleEast));
        assert_eq!(region_of(&GpsPoint::new(35.6762, 139.6503)), Some(Region::Asia));
        assert_eq!(region_of(&GpsPoint::new(-33.8688, 151.2093)), Some(Region::Oceania));
        assert_eq!(region_of(&GpsPoint::new(-77.85, 166.67)), Some(Region::Antarctica));
        // Middle of the Pacific
        assert_eq!(region_of(&GpsPoint::new(0.0, -140.0)), None);
    }
}
