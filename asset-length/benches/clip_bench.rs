use std::f64::consts::TAU;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use itertools::Itertools;

use asset_length::AssetLengthCalculator;
use asset_length::entities::{AssetGeometry, WorkArea};
use asset_length::length::{clipper, decomposer};
use asset_length::util::ClipConfig;

criterion_main!(benches);
criterion_group!(benches, clip_bench, batch_bench);

const N_LINE_VERTICES: [usize; 4] = [10, 100, 1_000, 10_000];
const N_ASSETS: usize = 1_000;

/// Regular polygon approximating a circle of `radius` degrees around `center`
fn circle(center: Coord, radius: f64, n_vertices: usize) -> Polygon {
    let ring = (0..n_vertices)
        .map(|i| {
            let angle = TAU * i as f64 / n_vertices as f64;
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect_vec();
    Polygon::new(LineString::new(ring), vec![])
}

/// Work area of 4 disjoint circular parts along the x-axis
fn work_area() -> WorkArea {
    let parts = (0..4)
        .map(|i| circle((i as f64 * 0.01, 0.0).into(), 0.004, 64))
        .collect_vec();
    WorkArea::MultiPolygon(MultiPolygon::new(parts))
}

/// Zig-zag line along the x-axis, crossing every part of the work area several times
fn zig_zag(n_vertices: usize) -> LineString {
    (0..n_vertices)
        .map(|i| {
            let x = -0.005 + 0.04 * i as f64 / n_vertices as f64;
            let y = if i % 2 == 0 { -0.005 } else { 0.005 };
            (x, y)
        })
        .collect_vec()
        .into()
}

/// Clipping a single line of increasing complexity against a multi-part work area
fn clip_bench(c: &mut Criterion) {
    let work_area = work_area();
    let parts = decomposer::parts(&work_area);
    let config = ClipConfig::default();

    let mut group = c.benchmark_group("clip");
    for n_vertices in N_LINE_VERTICES {
        let line = zig_zag(n_vertices);
        group.bench_function(BenchmarkId::from_parameter(n_vertices), |b| {
            b.iter(|| clipper::clip(&line, &parts, &config))
        });
    }
    group.finish();
}

/// Measuring a batch of assets, in parallel and sequentially
fn batch_bench(c: &mut Criterion) {
    let work_area = work_area();
    let assets = (0..N_ASSETS)
        .map(|_| AssetGeometry::LineString(zig_zag(100)))
        .collect_vec();
    let calculator = AssetLengthCalculator::default();

    let mut group = c.benchmark_group("batch");
    group.bench_function("parallel", |b| {
        b.iter(|| calculator.lengths(&assets, &work_area))
    });
    group.bench_function("sequential", |b| {
        b.iter(|| calculator.lengths_sequential(&assets, &work_area))
    });
    group.finish();
}
