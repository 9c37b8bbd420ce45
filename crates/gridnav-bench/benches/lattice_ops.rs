//! Criterion micro-benchmarks for lattice lookup, resize and cascade removal.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gridnav_bench::{dense_profile, sparse_profile};
use gridnav_core::Cell;

/// Benchmark: try_get_node() on all 32K cells of a 32^3 sparse grid.
fn bench_lookup_all_cells_32k(c: &mut Criterion) {
    let grid = sparse_profile(32).unwrap();
    let cells: Vec<Cell> = grid.lattice().bounds().iter().collect();

    c.bench_function("lookup_all_cells_32k", |b| {
        b.iter(|| {
            for &cell in &cells {
                black_box(grid.try_get_node(cell));
            }
        });
    });
}

/// Benchmark: out-of-range lookups, which must stay as cheap as hits.
fn bench_lookup_out_of_range(c: &mut Criterion) {
    let grid = sparse_profile(32).unwrap();

    c.bench_function("lookup_out_of_range_1k", |b| {
        b.iter(|| {
            for i in 0..1000i32 {
                black_box(grid.try_get_node(Cell::new(32 + i, -i, i)));
            }
        });
    });
}

/// Benchmark: grow a populated 32^3 grid to 48^3 (all nodes preserved).
fn bench_resize_grow(c: &mut Criterion) {
    c.bench_function("resize_grow_32_to_48", |b| {
        b.iter_batched(
            || sparse_profile(32).unwrap(),
            |mut grid| {
                let report = grid.set_dimensions(48, 48, 48).unwrap();
                black_box(report);
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: shrink a linked 24^3 grid to 12^3, cascading ~7/8 of nodes.
fn bench_resize_shrink_cascade(c: &mut Criterion) {
    c.bench_function("resize_shrink_cascade_24_to_12", |b| {
        b.iter_batched(
            || dense_profile(24).unwrap(),
            |mut grid| {
                let report = grid.set_dimensions(12, 12, 12).unwrap();
                black_box(report);
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: remove every node of a linked 16^3 grid one by one.
fn bench_remove_all_linked(c: &mut Criterion) {
    c.bench_function("remove_all_linked_16", |b| {
        b.iter_batched(
            || {
                let grid = dense_profile(16).unwrap();
                let ids: Vec<_> = grid.nodes().map(|(_, id, _)| id).collect();
                (grid, ids)
            },
            |(mut grid, ids)| {
                for id in ids {
                    black_box(grid.remove_node(id));
                }
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_lookup_all_cells_32k,
    bench_lookup_out_of_range,
    bench_resize_grow,
    bench_resize_shrink_cascade,
    bench_remove_all_linked
);
criterion_main!(benches);
