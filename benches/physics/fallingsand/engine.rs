use criterion::{black_box, criterion_group, Criterion};
use falling_sand::physics::fallingsand::engine::builder::SandEngineBuilder;
use falling_sand::physics::fallingsand::engine::commands::TickCommands;
use falling_sand::physics::fallingsand::engine::SandEngine;
use falling_sand::physics::fallingsand::util::vectors::CellVector;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The default board with snow falling for a while, so there is sand to move
fn get_snowy_engine() -> SandEngine<StdRng> {
    let mut engine = SandEngineBuilder::new()
        .snowing(true)
        .build(StdRng::seed_from_u64(0))
        .unwrap();
    for _ in 0..200 {
        engine.tick(&TickCommands::NONE);
    }
    engine
}

fn bench_tick_empty(c: &mut Criterion) {
    let mut engine = SandEngineBuilder::new()
        .build(StdRng::seed_from_u64(0))
        .unwrap();
    c.bench_function("tick_empty", |b| {
        b.iter(|| {
            engine.tick(black_box(&TickCommands::NONE));
        })
    });
}

fn bench_tick_snowing(c: &mut Criterion) {
    let mut engine = get_snowy_engine();
    let paint = TickCommands::paint_at(CellVector::new(75, 10));
    c.bench_function("tick_snowing", |b| {
        b.iter(|| {
            engine.tick(black_box(&paint));
        })
    });
}

criterion_group!(benches, bench_tick_empty, bench_tick_snowing);
