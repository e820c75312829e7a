//! A single radiating shard.
//!
//! Shards are short-lived line segments flying outward from wherever they
//! were spawned. Every tick a shard moves along its angle, jitters, sheds
//! speed, shrinks, rotates, and loses life; once it is spent (or has flown
//! far enough from the canvas center) the system retires it.
//!
//! Two creation profiles exist: [`Shard::ambient`] for the simmering
//! baseline, and [`Shard::burst`] for high-energy emissions scaled by a
//! burst intensity.

use glam::{Vec2, Vec4};
use rand::Rng;
use std::f32::consts::TAU;

use crate::frame::Frame;

/// Life scale maximum. A fresh shard starts fully alive.
pub const FULL_LIFE: f32 = 255.0;

/// Life drained per tick, multiplied by the current intensity.
const LIFE_DRAIN: f32 = 5.0;

/// Per-tick speed retention.
const SPEED_DECAY: f32 = 0.96;

/// Per-tick length/thickness retention.
const SHRINK_DECAY: f32 = 0.98;

/// Shards thinner than this are invisible and get retired.
const MIN_THICKNESS: f32 = 0.5;

/// Shards shorter than this are invisible and get retired.
const MIN_LEN: f32 = 1.0;

/// Retirement distance from canvas center, as a fraction of the larger
/// canvas dimension.
const RANGE_FACTOR: f32 = 0.8;

/// One decaying line-segment particle.
#[derive(Debug, Clone)]
pub struct Shard {
    position: Vec2,
    angle: f32,
    speed: f32,
    len: f32,
    thickness: f32,
    color: Vec4,
    life: f32,
    rotation_drift: f32,
}

impl Shard {
    /// Create an ambient shard: moderate speed, gentle rotation drift.
    ///
    /// Used for the initial seeding pass, where `position` is a random
    /// point on the canvas.
    pub fn ambient(position: Vec2, colors: &[Vec4], rng: &mut impl Rng) -> Self {
        Self {
            position,
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(3.0..8.0),
            len: rng.gen_range(20.0..60.0),
            thickness: rng.gen_range(2.0..6.0),
            color: pick_color(colors, rng),
            life: FULL_LIFE,
            rotation_drift: rng.gen_range(-0.1..0.1),
        }
    }

    /// Create a burst shard: much faster, longer, thicker, with a wider
    /// rotation drift. Speed scales with `burst_intensity`.
    pub fn burst(position: Vec2, colors: &[Vec4], burst_intensity: f32, rng: &mut impl Rng) -> Self {
        Self {
            position,
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(8.0..15.0) * burst_intensity,
            len: rng.gen_range(40.0..80.0),
            thickness: rng.gen_range(4.0..8.0),
            color: pick_color(colors, rng),
            life: FULL_LIFE,
            rotation_drift: rng.gen_range(-0.2..0.2),
        }
    }

    /// Advance the shard by one tick.
    ///
    /// `intensity` scales movement, jitter, rotation, and life drain;
    /// `spread` scales only the outward movement.
    pub fn update(&mut self, intensity: f32, spread: f32, rng: &mut impl Rng) {
        let direction = Vec2::new(self.angle.cos(), self.angle.sin());
        self.position += direction * self.speed * intensity * spread;

        // Agitation jitter, independent per axis
        self.position += Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)) * intensity;

        self.speed *= SPEED_DECAY;
        self.len *= SHRINK_DECAY;
        self.thickness *= SHRINK_DECAY;

        self.angle += self.rotation_drift * intensity;

        self.life = (self.life - LIFE_DRAIN * intensity).clamp(0.0, FULL_LIFE);
    }

    /// Whether the shard is spent: out of life, shrunk to invisibility, or
    /// flown beyond 0.8x the larger canvas dimension from the center.
    pub fn should_retire(&self, canvas: Vec2) -> bool {
        let range = canvas.x.max(canvas.y) * RANGE_FACTOR;
        self.life <= 0.0
            || self.len < MIN_LEN
            || self.thickness < MIN_THICKNESS
            || self.position.distance(canvas * 0.5) > range
    }

    /// Emit the shard as a stroked segment, faded by remaining life.
    pub fn draw(&self, frame: &mut Frame) {
        let mut color = self.color;
        color.w *= self.life / FULL_LIFE;
        frame.push_segment(self.position, self.angle, self.len, self.thickness, color);
    }

    /// Current position (free-form, not clamped to the canvas).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Remaining life on the 0-255 scale.
    pub fn life(&self) -> f32 {
        self.life
    }

    /// Current segment length.
    pub fn len(&self) -> f32 {
        self.len
    }

    /// Current stroke width.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// The color picked at creation.
    pub fn color(&self) -> Vec4 {
        self.color
    }
}

/// Pick one color from the palette's shard set, uniformly.
fn pick_color(colors: &[Vec4], rng: &mut impl Rng) -> Vec4 {
    colors[rng.gen_range(0..colors.len())]
}
