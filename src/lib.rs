//! # Anger
//!
//! An interactive generative artwork: line-shaped shards radiate from a
//! pulsating central pressure point, driven entirely by where the pointer
//! is and when it clicks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use anger::window::{run, RunOptions};
//!
//! fn main() {
//!     run(RunOptions::default()).unwrap();
//! }
//! ```
//!
//! ## Interaction
//!
//! | Input | Effect |
//! |-------|--------|
//! | Pointer Y (bottom -> top) | Intensity 0.5 - 3.0: speed, pulse rate, spawn frequency |
//! | Pointer X (left -> right) | Spread 0.5 - 2.5: focused vs. chaotic dispersal |
//! | Click | Toggle palette + outburst of 150 high-energy shards over 10 frames |
//! | Escape | Exit |
//!
//! ## Core Concepts
//!
//! ### Shards
//!
//! A [`Shard`] is a decaying line segment: it flies outward along its
//! angle, jitters, sheds speed and size each tick, and fades out as its
//! life drains. The system retires a shard once it is spent or has flown
//! beyond 0.8x the larger canvas dimension from the center.
//!
//! ### The pressure point
//!
//! Two concentric discs at the canvas center, eased toward a sinusoidal
//! pulse whose frequency scales with intensity — the built-up tension the
//! shards release.
//!
//! ### Palettes
//!
//! Exactly two [`Palette`]s, both in the red/black/dark-orange family.
//! Clicking toggles between them and repaints the background.
//!
//! ### Frames
//!
//! The core never talks to the GPU. Each [`Anger::tick`] fills a [`Frame`]
//! with ordered [`DrawCommand`]s (background rect, glow discs, shard
//! segments) that the `gpu` renderer consumes. This seam keeps the whole
//! simulation testable headless — see the `headless` demo.
//!
//! ## Determinism
//!
//! All randomness flows through an injected [`rand::Rng`], so tests (and
//! the `seeded` demo) can pin a seed while the normal run seeds from
//! entropy. There is no cross-run reproducibility contract.

pub mod error;
pub mod frame;
pub mod gpu;
pub mod input;
pub mod palette;
pub mod shard;
pub mod system;
pub mod time;
pub mod window;

pub use error::{GpuError, RunError};
pub use frame::{DrawCommand, Frame};
pub use glam::{Vec2, Vec4};
pub use palette::Palette;
pub use shard::Shard;
pub use system::Anger;
pub use window::{run, RunOptions};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use anger::prelude::*;
/// ```
pub mod prelude {
    pub use crate::frame::{DrawCommand, Frame};
    pub use crate::input::Input;
    pub use crate::palette::Palette;
    pub use crate::shard::Shard;
    pub use crate::system::Anger;
    pub use crate::time::Time;
    pub use crate::window::{run, RunOptions};
    pub use crate::{Vec2, Vec4};
}
