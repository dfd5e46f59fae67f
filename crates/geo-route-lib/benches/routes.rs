//! Benchmarks for geo-route-lib
//!
//! Run with: cargo bench --package geo-route-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo_route_lib::{
    DrivingRouteFormatter, GeoPoint, GeoSegment, Route, RouteFormatter, WalkingRouteFormatter,
};
use std::hint::black_box;

/// Generate a zig-zag chain of connected segments, renaming the street every 4 segments
fn generate_segments(count: usize) -> Vec<GeoSegment> {
    let mut lat = 32_770_000;
    let mut lon = 35_010_000;
    (0..count)
        .map(|i| {
            let from = GeoPoint::new(lat, lon).unwrap();
            if i % 2 == 0 {
                lat += 500;
            } else {
                lon += 700;
            }
            let to = GeoPoint::new(lat, lon).unwrap();
            GeoSegment::new(format!("Street {}", i / 4), from, to).unwrap()
        })
        .collect()
}

fn bench_route_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_building");

    for count in [16, 128, 1024] {
        let segments = generate_segments(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("add_segment", count), &segments, |b, segs| {
            b.iter(|| Route::try_from_segments(black_box(segs.iter().cloned())).unwrap())
        });
    }

    group.finish();
}

fn bench_directions(c: &mut Criterion) {
    let mut group = c.benchmark_group("directions");
    let route = Route::try_from_segments(generate_segments(1024)).unwrap();

    group.bench_function("walking", |b| {
        let formatter = WalkingRouteFormatter::default();
        b.iter(|| formatter.compute_directions(black_box(&route), 0.0).unwrap())
    });
    group.bench_function("driving", |b| {
        b.iter(|| DrivingRouteFormatter.compute_directions(black_box(&route), 0.0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_route_building, bench_directions);
criterion_main!(benches);
