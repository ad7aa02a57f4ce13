//! Benchmarks for axis geometry on large grids: lazy offset extension,
//! warm coordinate lookup, and reordering.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gridview::{Axis, Orientation};

const LINES: i32 = 100_000;

/// A 100k-row axis with scattered size overrides and hidden lines.
fn large_axis() -> Axis {
    let mut axis = Axis::new(Orientation::Rows, 20, 4, 24).expect("axis config");
    axis.set_count(LINES).expect("count");
    let mut i = 0;
    while i < LINES {
        axis.set_cell_size(i, 35).expect("size override");
        i += 97;
    }
    let mut i = 1;
    while i < LINES {
        axis.hide(i).expect("hide");
        i += 131;
    }
    axis
}

/// Cold cache: one far lookup forces the full cumulative-offset build.
fn bench_lazy_extension(c: &mut Criterion) {
    c.bench_function("extend_offsets_100k", |b| {
        b.iter_batched(
            large_axis,
            |mut axis| black_box(axis.start_of_position(LINES - 1, 0).expect("start")),
            BatchSize::SmallInput,
        )
    });
}

/// Warm cache: binary-search lookups across the whole body.
fn bench_coordinate_lookup(c: &mut Criterion) {
    let mut axis = large_axis();
    let far = axis.start_of_position(LINES - 1, 0).expect("warmup");
    c.bench_function("position_at_warm_100k", |b| {
        let mut coord = 0i64;
        b.iter(|| {
            coord = (coord + 7_919) % far.max(1);
            black_box(axis.position_at(coord, 0))
        })
    });
}

fn bench_move_position(c: &mut Criterion) {
    c.bench_function("move_position_10k", |b| {
        b.iter_batched(
            || {
                let mut axis = Axis::new(Orientation::Columns, 64, 8, 40).expect("axis config");
                axis.set_count(10_000).expect("count");
                axis
            },
            |mut axis| {
                axis.move_position(0, 9_999).expect("move");
                black_box(axis.index_of_position(9_999).expect("index"))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lazy_extension,
    bench_coordinate_lookup,
    bench_move_position
);
criterion_main!(benches);
