//! # Headless
//!
//! Drives the particle system without a window: a scripted pointer sweeps
//! a circle, a click lands halfway through, and the shard count is printed
//! once a second's worth of ticks. Demonstrates that the core is fully
//! decoupled from the rendering surface.
//!
//! Run with: `cargo run --example headless`

use anger::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    let canvas = Vec2::new(800.0, 600.0);
    let mut rng = SmallRng::seed_from_u64(42);
    let mut system = Anger::new(Palette::Crimson);
    system.initialize(canvas, &mut rng);

    let mut frame = Frame::new();
    for tick in 0..600u64 {
        // Sweep the pointer in a slow circle around the center
        let t = tick as f32 * 0.02;
        let pointer = canvas * 0.5 + Vec2::new(t.cos(), t.sin()) * 250.0;

        if tick == 300 {
            system.on_pointer_down();
        }

        system.tick(pointer, canvas, tick, &mut rng, &mut frame);

        if tick % 60 == 0 {
            println!(
                "tick {:3}: {:3} shards, {:3} draw commands, intensity {:.2}, palette {:?}",
                tick,
                system.shard_count(),
                frame.len(),
                system.intensity(),
                system.palette(),
            );
        }
    }
}
