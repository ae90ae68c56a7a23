//! # SB-01 Linear Cells Brutal Benchmarks
//!
//! Claims to validate:
//! - `take_mut`/`give_mut` cost a branch and a move, no allocation
//! - `peek` is O(1) regardless of sequence length

use criterion::{black_box, BenchmarkId, Criterion};
use sb_01_linear_cells::{LinearCell, LinearSeq};

fn brutal_cell_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("sb-01/brutal/cell");

    group.bench_function("take_give_mut", |b| {
        let mut cell = LinearCell::new(0u64);
        b.iter(|| {
            let v = cell.take_mut();
            cell.give_mut(black_box(v + 1));
        })
    });

    group.bench_function("swap_mut", |b| {
        let mut cell = LinearCell::new(0u64);
        b.iter(|| black_box(cell.swap_mut(black_box(7))))
    });

    group.finish();
}

fn brutal_seq_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("sb-01/brutal/seq");

    for len in [1_000usize, 100_000, 1_000_000] {
        let seq = LinearSeq::from_fn(len, |i| i as u64);
        group.bench_with_input(BenchmarkId::new("peek_last", len), &seq, |b, seq| {
            b.iter(|| black_box(*seq.peek(black_box(len - 1))))
        });
    }

    group.bench_function("take_give_middle", |b| {
        let mut seq = LinearSeq::from_fn(1_000, |i| i as u64);
        b.iter(|| {
            let v = seq.take(black_box(500));
            seq.give(500, v);
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_cell_round_trip(c);
    brutal_seq_peek(c);
}
