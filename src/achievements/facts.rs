//! Derived quantities shared by the achievement rules.
//!
//! Computed once per evaluation so that each rule stays a cheap test over
//! precomputed values.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Weekday};
use rstar::{primitives::GeomWithData, RTree};

use crate::geo_utils::{distance_km, meters_to_degrees};
use crate::{GpsPoint, Photo};

/// A photo that carries a full coordinate pair.
#[derive(Debug, Clone, Copy)]
pub struct LocatedPhoto<'a> {
    pub photo: &'a Photo,
    pub point: GpsPoint,
    pub altitude: Option<f64>,
}

impl LocatedPhoto<'_> {
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.photo.timestamp
    }
}

/// Movement between two consecutive located photos with a positive time gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from_photo_id: String,
    pub to_photo_id: String,
    pub distance_km: f64,
    pub seconds: f64,
    pub speed_kmh: f64,
}

/// Everything the rules need to know about one photo set.
#[derive(Debug)]
pub struct TripFacts<'a> {
    /// All photos, chronological (stable)
    pub photos: Vec<&'a Photo>,
    /// Photos with coordinates, chronological
    pub located: Vec<LocatedPhoto<'a>>,
    /// Speeds between consecutive located photos
    pub segments: Vec<Segment>,
    /// Unrounded distance along the located photos, km
    pub distance_km: f64,
    /// Latest minus earliest timestamp, seconds
    pub duration_secs: i64,
    /// Local hour of each photo
    pub hours: Vec<u32>,
    /// Local calendar date of each photo
    pub dates: Vec<NaiveDate>,
}

impl<'a> TripFacts<'a> {
    pub fn new(photos: &'a [Photo]) -> Self {
        let mut sorted: Vec<&Photo> = photos.iter().collect();
        sorted.sort_by_key(|p| p.timestamp);

        let located: Vec<LocatedPhoto> = sorted
            .iter()
            .filter_map(|&p| {
                p.location().map(|point| LocatedPhoto {
                    photo: p,
                    point,
                    altitude: p.located_altitude(),
                })
            })
            .collect();

        let mut distance_km_total = 0.0;
        let mut segments = Vec::new();
        for pair in located.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let km = distance_km(&a.point, &b.point);
            distance_km_total += km;

            // Pairs sharing a timestamp have no defined speed
            let seconds = (b.timestamp() - a.timestamp()).num_milliseconds() as f64 / 1000.0;
            if seconds > 0.0 {
                segments.push(Segment {
                    from_photo_id: a.photo.id.clone(),
                    to_photo_id: b.photo.id.clone(),
                    distance_km: km,
                    seconds,
                    speed_kmh: km / (seconds / 3600.0),
                });
            }
        }

        let duration_secs = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_seconds(),
            _ => 0,
        };

        let hours = sorted.iter().map(|p| p.timestamp.hour()).collect();
        let dates = sorted.iter().map(|p| p.timestamp.date_naive()).collect();

        Self {
            photos: sorted,
            located,
            segments,
            distance_km: distance_km_total,
            duration_secs,
            hours,
            dates,
        }
    }

    pub fn count(&self) -> u64 {
        self.photos.len() as u64
    }

    /// The fastest segment, if any two located photos are apart in time.
    pub fn fastest_segment(&self) -> Option<&Segment> {
        self.segments
            .iter()
            .max_by(|a, b| a.speed_kmh.total_cmp(&b.speed_kmh))
    }

    /// Distance over duration, km/h. `None` without movement data.
    pub fn average_speed_kmh(&self) -> Option<f64> {
        if self.located.len() < 2 || self.duration_secs <= 0 {
            return None;
        }
        Some(self.distance_km / (self.duration_secs as f64 / 3600.0))
    }

    /// Calendar days covered, counting both the first and last day.
    ///
    /// Dates, not elapsed time: Friday 23:00 to Sunday 01:00 spans 3 days.
    pub fn span_days(&self) -> i64 {
        match (self.dates.iter().min(), self.dates.iter().max()) {
            (Some(first), Some(last)) => (*last - *first).num_days() + 1,
            _ => 0,
        }
    }

    pub fn distinct_dates(&self) -> usize {
        self.dates.iter().collect::<BTreeSet<_>>().len()
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.dates.iter().map(|d| d.weekday())
    }

    /// Altitudes of located photos.
    pub fn altitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.located.iter().filter_map(|l| l.altitude)
    }

    /// Largest number of photos whose timestamps fall within `window_ms`
    /// of the first one (last - first < window).
    pub fn densest_window(&self, window_ms: i64) -> usize {
        let mut best = 0;
        let mut start = 0;
        for end in 0..self.photos.len() {
            while (self.photos[end].timestamp - self.photos[start].timestamp).num_milliseconds()
                >= window_ms
            {
                start += 1;
            }
            best = best.max(end - start + 1);
        }
        best
    }

    /// Longest gap between consecutive photos, seconds.
    pub fn longest_gap_secs(&self) -> i64 {
        self.photos
            .windows(2)
            .map(|w| (w[1].timestamp - w[0].timestamp).num_seconds())
            .max()
            .unwrap_or(0)
    }

    /// Longest time span covered by photos within `radius_m` of a single
    /// anchor photo, seconds.
    pub fn longest_dwell_secs(&self, radius_m: f64) -> i64 {
        if self.located.len() < 2 {
            return 0;
        }

        // Each point is also stored one turn east and west, so clusters
        // straddling the antimeridian stay neighbours in degree space
        let tree = RTree::bulk_load(
            self.located
                .iter()
                .enumerate()
                .flat_map(|(i, l)| {
                    [-360.0, 0.0, 360.0].map(|shift| {
                        GeomWithData::new([l.point.longitude + shift, l.point.latitude], i)
                    })
                })
                .collect(),
        );

        let radius_km = radius_m / 1000.0;
        let mut best = 0;
        for anchor in &self.located {
            let search = meters_to_degrees(radius_m, anchor.point.latitude);
            let query = [anchor.point.longitude, anchor.point.latitude];

            let mut first = anchor.timestamp();
            let mut last = anchor.timestamp();
            for candidate in tree.locate_within_distance(query, search * search) {
                let Some(other) = self.located.get(candidate.data) else {
                    continue;
                };
                if distance_km(&anchor.point, &other.point) <= radius_km {
                    first = first.min(other.timestamp());
                    last = last.max(other.timestamp());
                }
            }
            best = best.max((last - first).num_seconds());
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn base() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-08T10:00:00+01:00").unwrap()
    }

    fn photo_at(id: &str, seconds: i64) -> Photo {
        Photo::new(id, base() + Duration::seconds(seconds))
    }

    #[test]
    fn test_facts_sort_input() {
        let photos = vec![photo_at("b", 60), photo_at("a", 0)];
        let facts = TripFacts::new(&photos);
        assert_eq!(facts.photos[0].id, "a");
        assert_eq!(facts.duration_secs, 60);
        assert!(facts.located.is_empty());
        assert!(facts.fastest_segment().is_none());
        assert_eq!(facts.average_speed_kmh(), None);
    }

    #[test]
    fn test_segments_skip_zero_time_gap() {
        let photos = vec![
            photo_at("a", 0).with_location(0.0, 0.0),
            photo_at("b", 0).with_location(1.0, 0.0),
            photo_at("c", 3600).with_location(1.0, 1.0),
        ];
        let facts = TripFacts::new(&photos);

        assert_eq!(facts.segments.len(), 1);
        assert_eq!(facts.segments[0].from_photo_id, "b");
        // Distance still counts the zero-gap pair
        assert!(facts.distance_km > 200.0);
        let fastest = facts.fastest_segment().unwrap();
        assert!((fastest.speed_kmh - fastest.distance_km).abs() < 1e-9);
    }

    #[test]
    fn test_span_days_inclusive() {
        let photos = vec![photo_at("a", 0), photo_at("b", 2 * 86_400)];
        let facts = TripFacts::new(&photos);
        assert_eq!(facts.span_days(), 3);
        assert_eq!(facts.distinct_dates(), 2);

        let single = vec![photo_at("a", 0)];
        assert_eq!(TripFacts::new(&single).span_days(), 1);
    }

    #[test]
    fn test_densest_window() {
        let photos: Vec<Photo> = (0..12).map(|i| photo_at(&i.to_string(), i * 5)).collect();
        let facts = TripFacts::new(&photos);
        // 0..55s inclusive: all 12 within 60s
        assert_eq!(facts.densest_window(60_000), 12);
        // 5 s spacing: two photos per 10 s window
        assert_eq!(facts.densest_window(10_000), 2);
    }

    #[test]
    fn test_longest_gap() {
        let photos = vec![photo_at("a", 0), photo_at("b", 100), photo_at("c", 1000)];
        assert_eq!(TripFacts::new(&photos).longest_gap_secs(), 900);
    }

    #[test]
    fn test_longest_dwell() {
        // Two photos 50 m apart, three hours apart; a third far away
        let photos = vec![
            photo_at("a", 0).with_location(48.8566, 2.3522),
            photo_at("far", 3600).with_location(48.9, 2.5),
            photo_at("b", 3 * 3600).with_location(48.85705, 2.3522),
        ];
        let facts = TripFacts::new(&photos);
        assert_eq!(facts.longest_dwell_secs(100.0), 3 * 3600);
        assert_eq!(facts.longest_dwell_secs(10.0), 0);
    }

    #[test]
    fn test_longest_dwell_across_antimeridian() {
        // About 21 m apart, on either side of 180 degrees
        let photos = vec![
            photo_at("fiji", 0).with_location(-17.0, 179.9999),
            photo_at("fiji-east", 4 * 3600).with_location(-17.0, -179.9999),
        ];
        let facts = TripFacts::new(&photos);
        assert_eq!(facts.longest_dwell_secs(100.0), 4 * 3600);
        assert_eq!(facts.longest_dwell_secs(10.0), 0);
    }

    #[test]
    fn test_span_days_counts_calendar_days() {
        // Friday 23:00 to Sunday 01:00 is 26 hours over three dates
        let photos = vec![
            Photo::new("fri", DateTime::parse_from_rfc3339("2024-06-07T23:00:00+02:00").unwrap()),
            Photo::new("sun", DateTime::parse_from_rfc3339("2024-06-09T01:00:00+02:00").unwrap()),
        ];
        let facts = TripFacts::new(&photos);
        assert_eq!(facts.duration_secs, 26 * 3600);
        assert_eq!(facts.span_days(), 3);
    }
}
