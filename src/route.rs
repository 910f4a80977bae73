//! Route building and trip aggregates.
//!
//! - [`build_route`]: geotagged photos to an ordered [`RoutePoint`] sequence
//! - [`total_distance`]: route length in km, rounded to one decimal
//! - [`duration`]: trip duration in seconds
//! - [`cumulative_distance`]: partial distance for progressive playback

use crate::geo_utils::distance_km;
use crate::{Photo, RoutePoint};

/// Project photos with both coordinates into a chronological route.
///
/// Photos sharing a timestamp keep their input order. Empty input yields an
/// empty route.
///
/// # Example
/// ```
/// use chrono::DateTime;
/// use trip_recorder::{build_route, Photo};
///
/// let ts = |s| DateTime::parse_from_rfc3339(s).unwrap();
/// let photos = vec![
///     Photo::new("b", ts("2024-01-01T12:00:00Z")).with_location(1.0, 1.0),
///     Photo::new("no-gps", ts("2024-01-01T11:00:00Z")),
///     Photo::new("a", ts("2024-01-01T10:00:00Z")).with_location(0.0, 0.0),
/// ];
///
/// let route = build_route(&photos);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route[0].photo_id.as_deref(), Some("a"));
/// ```
pub fn build_route(photos: &[Photo]) -> Vec<RoutePoint> {
    let mut located: Vec<(&Photo, crate::GpsPoint)> = photos
        .iter()
        .filter_map(|p| p.location().map(|point| (p, point)))
        .collect();

    // Stable: equal timestamps keep their relative input order
    located.sort_by_key(|(p, _)| p.timestamp);

    located
        .into_iter()
        .map(|(p, point)| RoutePoint {
            lat: point.latitude,
            lng: point.longitude,
            timestamp: p.timestamp,
            photo_id: Some(p.id.clone()),
        })
        .collect()
}

/// Sum of consecutive haversine distances along the route, in km, rounded
/// to one decimal. Routes of 0 or 1 points yield 0.0.
pub fn total_distance(route: &[RoutePoint]) -> f64 {
    let km: f64 = route
        .windows(2)
        .map(|w| distance_km(&w[0].point(), &w[1].point()))
        .sum();
    round_to_tenth(km)
}

/// Trip duration in whole seconds: latest minus earliest timestamp.
///
/// Photos need not be sorted. Fewer than 2 photos yield 0.
pub fn duration(photos: &[Photo]) -> i64 {
    if photos.len() < 2 {
        return 0;
    }

    let first = photos.iter().map(|p| p.timestamp).min();
    let last = photos.iter().map(|p| p.timestamp).max();

    match (first, last) {
        (Some(first), Some(last)) => (last - first).num_seconds(),
        _ => 0,
    }
}

/// Distance travelled from the first photo up to `up_to_index` (inclusive),
/// in km, over a chronologically sorted slice.
///
/// Consecutive pairs where either photo lacks coordinates contribute 0.
/// An index past the end is clamped to the last photo. Not rounded, since
/// playback shows it progressively.
pub fn cumulative_distance(photos_sorted_by_time: &[Photo], up_to_index: usize) -> f64 {
    if photos_sorted_by_time.len() < 2 {
        return 0.0;
    }

    let end = up_to_index.min(photos_sorted_by_time.len() - 1);

    photos_sorted_by_time[..=end]
        .windows(2)
        .map(|w| match (w[0].location(), w[1].location()) {
            (Some(a), Some(b)) => distance_km(&a, &b),
            _ => 0.0,
        })
        .sum()
}

/// Round to one decimal place.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
