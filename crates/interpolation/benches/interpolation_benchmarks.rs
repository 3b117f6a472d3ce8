//! Benchmarks for grid evaluation.
//!
//! Run with: cargo bench --package interpolation --bench interpolation_benchmarks

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use interpolation::{InterpolationGrid, PointSet, QuadrantSearch, SearchStrategy, SortedIndex};
use test_utils::jittered_lattice_samples;

// =============================================================================
// GRID EVALUATION BENCHMARKS
// =============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.sample_size(20);

    let points = Arc::new(PointSet::new(jittered_lattice_samples(40, 40, 0.3, 1)));

    for resolution in [50usize, 100, 200] {
        group.throughput(Throughput::Elements((resolution * resolution) as u64));

        for search in [SearchStrategy::LinearScan, SearchStrategy::SortedIndex] {
            let grid = InterpolationGrid::builder()
                .points(points.clone())
                .resolution(resolution, resolution)
                .search(search)
                .build()
                .unwrap();

            group.bench_with_input(
                BenchmarkId::new(search.as_str(), resolution),
                &grid,
                |b, grid| b.iter(|| black_box(grid.evaluate())),
            );
        }
    }

    group.finish();
}

// =============================================================================
// QUADRANT SEARCH BENCHMARKS
// =============================================================================

fn bench_sorted_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_index_build");

    for side in [20usize, 60, 120] {
        let points = PointSet::new(jittered_lattice_samples(side, side, 0.3, 9));
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::new("points", side * side), &points, |b, p| {
            b.iter(|| black_box(SortedIndex::new(p)))
        });
    }

    group.finish();
}

fn bench_single_query(c: &mut Criterion) {
    let points = PointSet::new(jittered_lattice_samples(100, 100, 0.3, 4));
    let index = SortedIndex::new(&points);

    c.bench_function("sorted_index_anchors", |b| {
        b.iter(|| black_box(index.anchors(black_box(49.7), black_box(50.2))))
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_sorted_index_build,
    bench_single_query
);
criterion_main!(benches);
