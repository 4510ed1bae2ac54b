//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_chess::board::{search, Board, Color, Difficulty};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves(Color::White)))
    });

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves(Color::White)))
    });

    let mut kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_moves(Color::White)))
    });
    group.bench_function("kiwipete_status", |b| b.iter(|| black_box(kiwipete.status())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        group.bench_with_input(
            BenchmarkId::new("startpos", format!("{difficulty:?}")),
            &difficulty.depth(),
            |b, &depth| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| search(black_box(&board), Color::White, depth, &mut rng))
            },
        );
    }

    let kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete_depth_2", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| search(black_box(&kiwipete), Color::White, 2, &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
