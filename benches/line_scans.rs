//! Benchmarks for line detection at the maximum board size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gridworks::board::Board;
use gridworks::core::Mark;

/// Worst case for every axis: the queried mark is absent, so no scan can
/// terminate early.
fn absent_mark_board(side: u8) -> Board {
    let mut board = Board::new(side, side);
    for row in 0..side {
        for col in 0..side {
            board.set(row, col, Mark::O).unwrap();
        }
    }
    board
}

/// Best realistic case: a run completes near the origin.
fn early_hit_board(side: u8) -> Board {
    let mut board = Board::new(side, side);
    board.set(0, 0, Mark::X).unwrap();
    board.set(0, 1, Mark::X).unwrap();
    board.set(0, 2, Mark::X).unwrap();
    board
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_scans");

    for side in [15u8, 63, 255] {
        let full = absent_mark_board(side);
        group.bench_with_input(BenchmarkId::new("absent_mark", side), &full, |b, board| {
            b.iter(|| black_box(board.has_any_run(black_box(Mark::X))))
        });

        let early = early_hit_board(side);
        group.bench_with_input(BenchmarkId::new("early_hit", side), &early, |b, board| {
            b.iter(|| black_box(board.has_any_run(black_box(Mark::X))))
        });
    }

    group.finish();
}

fn bench_draw_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_check");

    let full = absent_mark_board(255);
    group.bench_function("full_255", |b| b.iter(|| black_box(full.is_full())));

    let sparse = early_hit_board(255);
    group.bench_function("sparse_255", |b| b.iter(|| black_box(sparse.is_full())));

    group.finish();
}

criterion_group!(benches, bench_scans, bench_draw_check);
criterion_main!(benches);
