//! # Seeded
//!
//! Runs the artwork with a fixed RNG seed for deterministic playback:
//! the same seed and the same pointer movements replay the same simmer.
//!
//! Run with: `cargo run --example seeded -- 1234`

use anger::window::{run, RunOptions};

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA16E5);

    let options = RunOptions {
        seed: Some(seed),
        title: format!("Anger (seed {})", seed),
        ..Default::default()
    };

    if let Err(e) = run(options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
