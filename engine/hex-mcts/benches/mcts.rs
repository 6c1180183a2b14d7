//! Move-selector benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p hex-mcts`
//!
//! These benchmarks measure:
//! - Full move selection with varying trial counts and board sizes
//! - The connectivity detector on a filled board

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hex_core::{HexBoard, Marker, PathDetector, RowCol};
use hex_mcts::{MonteCarloConfig, MonteCarloEngine};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A board with a few real moves committed, as seen mid-opening.
fn opening_board(edge_len: usize) -> HexBoard {
    let mut board = HexBoard::new(edge_len).unwrap();
    board.place(Marker::X, RowCol::new(1, 2)).unwrap();
    board.place(Marker::O, RowCol::new(2, 2)).unwrap();
    board.place(Marker::X, RowCol::new(2, 1)).unwrap();
    board
}

/// A fully marked board with markers assigned alternately at random.
fn full_board(edge_len: usize, seed: u64) -> HexBoard {
    let mut board = HexBoard::new(edge_len).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut cells: Vec<usize> = (0..board.cell_count()).collect();
    cells.shuffle(&mut rng);
    for (i, &cell) in cells.iter().enumerate() {
        let side = if i % 2 == 0 { Marker::X } else { Marker::O };
        board.set_marker_at(cell, side);
    }
    board
}

fn bench_choose_move_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move_trials");

    for trials in [10u32, 50, 200, 1000] {
        group.throughput(Throughput::Elements(trials as u64));
        group.bench_with_input(BenchmarkId::new("n5", trials), &trials, |b, &trials| {
            let mut board = opening_board(5);
            let mut detector = PathDetector::for_board(&board);
            let config = MonteCarloConfig::default().with_trials(trials).with_seed(42);
            let mut engine = MonteCarloEngine::for_board(config, &board);

            b.iter(|| {
                black_box(
                    engine
                        .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_choose_move_board_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move_board_sizes");
    let trials = 50u32;

    for edge_len in [5usize, 7, 9] {
        group.bench_with_input(
            BenchmarkId::new("trials50", edge_len),
            &edge_len,
            |b, &edge_len| {
                let mut board = opening_board(edge_len);
                let mut detector = PathDetector::for_board(&board);
                let config = MonteCarloConfig::default().with_trials(trials).with_seed(42);
                let mut engine = MonteCarloEngine::for_board(config, &board);

                b.iter(|| {
                    black_box(
                        engine
                            .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_find_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_ends");

    for edge_len in [5usize, 7, 11] {
        group.bench_with_input(
            BenchmarkId::new("full_board", edge_len),
            &edge_len,
            |b, &edge_len| {
                let board = full_board(edge_len, 42);
                let mut detector = PathDetector::for_board(&board);

                b.iter(|| black_box(detector.find_ends(&board, Marker::X, true)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_choose_move_trials,
    bench_choose_move_board_sizes,
    bench_find_ends,
);

criterion_main!(benches);
