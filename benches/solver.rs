//! Benchmarks for the sliding-block solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huarong::pieces::{PRESET_1, PRESET_3};
use huarong::{all_moves, canonical_signature, format_solution, solve, Board};

/// Benchmark solving the classic opening.
fn bench_solve(c: &mut Criterion) {
    let board = Board::from_rows(PRESET_1).unwrap();

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("preset_1", |b| b.iter(|| solve(black_box(&board))));
    group.finish();
}

/// Benchmark computing the canonical signature of a board.
fn bench_canonical_signature(c: &mut Criterion) {
    let board = Board::from_rows(PRESET_3).unwrap();

    c.bench_function("canonical_signature", |b| {
        b.iter(|| canonical_signature(black_box(&board)))
    });
}

/// Benchmark generating every legal move from a board.
fn bench_all_moves(c: &mut Criterion) {
    let board = Board::from_rows(PRESET_1).unwrap();

    c.bench_function("all_moves", |b| b.iter(|| all_moves(black_box(&board))));
}

/// Benchmark formatting a solution for display.
fn bench_format_solution(c: &mut Criterion) {
    let board = Board::from_rows(PRESET_1).unwrap();
    let steps = solve(&board).path.unwrap();

    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(black_box(&board), black_box(&steps)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_canonical_signature,
    bench_all_moves,
    bench_format_solution
);
criterion_main!(benches);
