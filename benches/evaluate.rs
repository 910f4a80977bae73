//! Achievement evaluation benchmarks.
//!
//! Run with: `cargo bench --bench evaluate`

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trip_recorder::{build_route, evaluate_at, total_distance, Photo, Trip, TripConfig};

/// A week-long trip wandering east from Lisbon, one photo every 10 minutes,
/// with every fifth photo missing GPS.
fn synthetic_trip(count: usize) -> Vec<Photo> {
    let start = DateTime::parse_from_rfc3339("2024-07-01T07:00:00+01:00").unwrap();
    (0..count)
        .map(|i| {
            let photo = Photo::new(format!("p{}", i), start + Duration::minutes(10 * i as i64));
            if i % 5 == 4 {
                return photo;
            }
            let t = i as f64;
            photo
                .with_location(38.7 + (t * 0.37).sin() * 0.05, -9.1 + t * 0.01)
                .with_altitude(50.0 + (t * 0.11).cos() * 40.0)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
    let mut group = c.benchmark_group("evaluate");

    for count in [10, 100, 1000] {
        let photos = synthetic_trip(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &photos, |b, photos| {
            b.iter(|| evaluate_at(black_box(photos), true, now))
        });
    }
    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let photos = synthetic_trip(1000);
    c.bench_function("route_1000", |b| {
        b.iter(|| total_distance(&build_route(black_box(&photos))))
    });
}

fn bench_trip(c: &mut Criterion) {
    let photos = synthetic_trip(1000);
    let config = TripConfig::default();
    c.bench_function("trip_from_photos_1000", |b| {
        b.iter(|| Trip::from_photos(black_box(&photos), false, &config))
    });
}

criterion_group!(benches, bench_evaluate, bench_route, bench_trip);
criterion_main!(benches);
