use chess_core::{Color, Game};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minimax_engine::{decide, SearchConfig};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_decide(c: &mut Criterion) {
    let config = SearchConfig::default();
    let mut group = c.benchmark_group("decide");

    let mut start = Game::new();
    group.bench_function("startpos", |b| {
        b.iter(|| decide(black_box(&mut start), Color::White, &config).unwrap())
    });

    let mut kiwipete = Game::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| decide(black_box(&mut kiwipete), Color::White, &config).unwrap())
    });

    group.finish();
}

fn bench_deeper(c: &mut Criterion) {
    let config = SearchConfig::with_depth(3);
    let mut start = Game::new();
    c.bench_function("decide depth 3", |b| {
        b.iter(|| decide(black_box(&mut start), Color::White, &config).unwrap())
    });
}

criterion_group!(benches, bench_decide, bench_deeper);
criterion_main!(benches);
