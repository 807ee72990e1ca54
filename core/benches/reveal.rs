use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minegrid_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        let config = BoardConfig::new(64, difficulty).unwrap();
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| RandomMineGenerator::seeded(black_box(0x5eed)).generate(config))
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let config = BoardConfig::new(Coord::MAX, Difficulty::Easy).unwrap();

    c.bench_function("reveal_easy_255", |b| {
        b.iter_batched(
            || Board::new(config, RandomMineGenerator::seeded(0x5eed)).unwrap(),
            |mut board| board.reveal(black_box((127, 127))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
