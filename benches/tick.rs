//! Benchmarks for the CPU side of the artwork: the per-tick simulation.
//!
//! Run with: `cargo bench`

use anger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CANVAS: Vec2 = Vec2::new(1280.0, 720.0);

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    // Pointer at the bottom left: low intensity, low spread
    group.bench_function("simmer", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);
        let mut frame = Frame::new();
        let pointer = Vec2::new(100.0, 700.0);
        let mut tick = 0u64;
        b.iter(|| {
            system.tick(black_box(pointer), CANVAS, tick, &mut rng, &mut frame);
            tick += 1;
        });
    });

    // Continuous outbursts keep the shard list pinned at the cap
    group.bench_function("at_cap", |b| {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);
        let mut frame = Frame::new();
        let pointer = Vec2::new(1280.0, 0.0);
        let mut tick = 0u64;
        for _ in 0..30 {
            system.on_pointer_down();
            system.tick(pointer, CANVAS, tick, &mut rng, &mut frame);
            tick += 1;
        }
        b.iter(|| {
            system.on_pointer_down();
            system.tick(black_box(pointer), CANVAS, tick, &mut rng, &mut frame);
            tick += 1;
        });
    });

    group.bench_function("initialize", |b| {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut system = Anger::new(Palette::Crimson);
        b.iter(|| system.initialize(black_box(CANVAS), &mut rng));
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
