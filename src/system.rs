//! The particle system driving the artwork.
//!
//! [`Anger`] owns the bounded shard list, the pulsating central pressure
//! point, and the two interaction scalars derived from the pointer:
//!
//! | Axis | Scalar | Range | Feel |
//! |------|--------|-------|------|
//! | pointer Y (bottom -> top) | intensity | 0.5 - 3.0 | simmer -> explosive |
//! | pointer X (left -> right) | spread | 0.5 - 2.5 | focused -> chaotic |
//!
//! The host calls [`Anger::tick`] once per rendered frame with the current
//! pointer position, canvas size, and frame index; the system fills a
//! [`Frame`] with draw commands. Pointer-down events toggle the palette and
//! arm a short outburst of high-energy shards.
//!
//! There is no failure mode here: all inputs are clamped on entry and the
//! shard list is hard-capped every tick.

use glam::Vec2;
use rand::Rng;

use crate::frame::Frame;
use crate::palette::Palette;
use crate::shard::Shard;

/// Shards seeded at initialize/resize.
const SEED_SHARDS: usize = 50;

/// Hard cap on live shards; the oldest are dropped beyond this.
pub const MAX_SHARDS: usize = 200;

/// Ticks an outburst stays armed after a click.
const OUTBURST_TICKS: u32 = 10;

/// Shards spawned per tick while an outburst is armed.
const OUTBURST_SPAWN: usize = 15;

/// Burst intensity used for outburst shards.
const OUTBURST_INTENSITY: f32 = 4.0;

/// Per-tick chance of an ambient center emission, multiplied by intensity.
const AMBIENT_SPAWN_CHANCE: f32 = 0.05;

const INTENSITY_MIN: f32 = 0.5;
const INTENSITY_MAX: f32 = 3.0;
const SPREAD_MIN: f32 = 0.5;
const SPREAD_MAX: f32 = 2.5;

/// Pressure point targets: base size/alpha plus a sinusoidal pulse whose
/// frequency scales with intensity.
const PRESSURE_SIZE_BASE: f32 = 100.0;
const PRESSURE_SIZE_PULSE: f32 = 30.0;
const PRESSURE_ALPHA_BASE: f32 = 200.0;
const PRESSURE_ALPHA_PULSE: f32 = 50.0;
const PRESSURE_EASE: f32 = 0.15;
const PRESSURE_ALPHA_MIN: f32 = 100.0;
const PRESSURE_ALPHA_MAX: f32 = 255.0;
const PULSE_RATE: f32 = 0.1;

/// Alpha of the per-frame background fade rectangle (out of 255).
const FADE_ALPHA: f32 = 10.0 / 255.0;

/// The pulsating central glow: two smoothed scalars, each eased toward a
/// time-varying target every tick.
#[derive(Debug, Clone, Copy, Default)]
struct PressurePoint {
    /// Outer disc diameter in pixels.
    size: f32,
    /// Outer disc opacity on the 0-255 scale.
    alpha: f32,
}

/// The artwork's particle system. One instance per running piece, owned by
/// the host loop and never shared.
#[derive(Debug)]
pub struct Anger {
    shards: Vec<Shard>,
    palette: Palette,
    pressure: PressurePoint,
    intensity: f32,
    spread: f32,
    outburst: u32,
    repaint: bool,
}

impl Anger {
    /// Create an empty system with the given starting palette.
    ///
    /// Call [`Anger::initialize`] once the canvas size is known.
    pub fn new(palette: Palette) -> Self {
        Self {
            shards: Vec::with_capacity(MAX_SHARDS),
            palette,
            pressure: PressurePoint::default(),
            intensity: 1.0,
            spread: 1.0,
            outburst: 0,
            repaint: true,
        }
    }

    /// Reset to the simmering baseline: clear all shards, seed 50 ambient
    /// ones at random canvas positions, zero the pressure point, and
    /// schedule a full background repaint.
    pub fn initialize(&mut self, canvas: Vec2, rng: &mut impl Rng) {
        self.shards.clear();
        let colors = self.palette.shards();
        for _ in 0..SEED_SHARDS {
            let position = Vec2::new(
                rng.gen_range(0.0..canvas.x),
                rng.gen_range(0.0..canvas.y),
            );
            self.shards.push(Shard::ambient(position, &colors, rng));
        }
        self.pressure = PressurePoint::default();
        self.repaint = true;
    }

    /// Handle a canvas resize by starting fresh. In-flight shards are
    /// deliberately discarded rather than repositioned.
    pub fn on_resize(&mut self, canvas: Vec2, rng: &mut impl Rng) {
        self.initialize(canvas, rng);
    }

    /// Handle a pointer-down: toggle the palette, repaint the background,
    /// and arm the outburst counter.
    pub fn on_pointer_down(&mut self) {
        self.palette = self.palette.toggled();
        self.repaint = true;
        self.outburst = OUTBURST_TICKS;
    }

    /// Advance the artwork by one frame and fill `frame` with its draw
    /// commands: background, pressure point, then one segment per shard.
    pub fn tick(
        &mut self,
        pointer: Vec2,
        canvas: Vec2,
        frame_index: u64,
        rng: &mut impl Rng,
        frame: &mut Frame,
    ) {
        frame.clear();

        // Simmering at the bottom, explosive at the top; focused at the
        // left, chaotic at the right.
        self.intensity = map_clamped(pointer.y, canvas.y, 0.0, INTENSITY_MIN, INTENSITY_MAX);
        self.spread = map_clamped(pointer.x, 0.0, canvas.x, SPREAD_MIN, SPREAD_MAX);

        self.draw_background(canvas, frame);
        self.update_pressure(frame_index);
        self.draw_pressure(canvas, frame);

        let center = canvas * 0.5;
        let colors = self.palette.shards();

        // Ambient trickle from the center, more frequent at high intensity
        if rng.gen::<f32>() < AMBIENT_SPAWN_CHANCE * self.intensity {
            self.shards
                .push(Shard::burst(center, &colors, self.intensity, rng));
        }

        if self.outburst > 0 {
            for _ in 0..OUTBURST_SPAWN {
                self.shards
                    .push(Shard::burst(center, &colors, OUTBURST_INTENSITY, rng));
            }
            self.outburst -= 1;
        }

        // Hard performance cap: drop the oldest excess, not the dimmest
        if self.shards.len() > MAX_SHARDS {
            let excess = self.shards.len() - MAX_SHARDS;
            self.shards.drain(..excess);
        }

        // Shards are drawn on the tick they retire, matching the original
        // update -> display -> cull ordering
        let (intensity, spread) = (self.intensity, self.spread);
        self.shards.retain_mut(|shard| {
            shard.update(intensity, spread, rng);
            shard.draw(frame);
            !shard.should_retire(canvas)
        });
    }

    fn draw_background(&mut self, canvas: Vec2, frame: &mut Frame) {
        let mut color = self.palette.background();
        if self.repaint {
            self.repaint = false;
        } else {
            color.w = FADE_ALPHA;
        }
        frame.push_rect(Vec2::ZERO, canvas, color);
    }

    fn update_pressure(&mut self, frame_index: u64) {
        let pulse = (frame_index as f32 * PULSE_RATE * self.intensity).sin();
        let ease = PRESSURE_EASE * self.intensity;

        let size_target = PRESSURE_SIZE_BASE + pulse * PRESSURE_SIZE_PULSE;
        let alpha_target = PRESSURE_ALPHA_BASE + pulse * PRESSURE_ALPHA_PULSE;

        self.pressure.size += (size_target - self.pressure.size) * ease;
        self.pressure.alpha += (alpha_target - self.pressure.alpha) * ease;
        self.pressure.alpha = self
            .pressure
            .alpha
            .clamp(PRESSURE_ALPHA_MIN, PRESSURE_ALPHA_MAX);
    }

    fn draw_pressure(&self, canvas: Vec2, frame: &mut Frame) {
        let center = canvas * 0.5;
        let mut outer = self.palette.glow();
        outer.w = self.pressure.alpha / 255.0;
        frame.push_disc(center, self.pressure.size * 0.5, outer);

        // Inner core: half the diameter, fully opaque
        frame.push_disc(center, self.pressure.size * 0.25, self.palette.glow());
    }

    /// Number of live shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// The live shards, oldest first.
    pub fn shards(&self) -> &[Shard] {
        &self.shards
    }

    /// The active palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Intensity derived on the last tick.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Spread derived on the last tick.
    pub fn spread(&self) -> f32 {
        self.spread
    }

    /// Outburst ticks remaining.
    pub fn outburst_remaining(&self) -> u32 {
        self.outburst
    }

    /// Current pressure point diameter.
    pub fn pressure_size(&self) -> f32 {
        self.pressure.size
    }

    /// Current pressure point opacity (0-255 scale).
    pub fn pressure_alpha(&self) -> f32 {
        self.pressure.alpha
    }
}

impl Default for Anger {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// Linearly remap `v` from `[in_a, in_b]` onto `[out_a, out_b]`, clamped to
/// the output range. The input range may be reversed (`in_a > in_b`).
fn map_clamped(v: f32, in_a: f32, in_b: f32, out_a: f32, out_b: f32) -> f32 {
    let t = ((v - in_a) / (in_b - in_a)).clamp(0.0, 1.0);
    out_a + (out_b - out_a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DrawCommand;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xA17)
    }

    fn ticked(system: &mut Anger, pointer: Vec2, rng: &mut SmallRng) -> Frame {
        let mut frame = Frame::new();
        system.tick(pointer, CANVAS, 0, rng, &mut frame);
        frame
    }

    #[test]
    fn test_map_clamped() {
        assert_eq!(map_clamped(0.0, 0.0, 10.0, 0.0, 1.0), 0.0);
        assert_eq!(map_clamped(10.0, 0.0, 10.0, 0.0, 1.0), 1.0);
        assert_eq!(map_clamped(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        // Out-of-range input clamps to the extremes
        assert_eq!(map_clamped(-5.0, 0.0, 10.0, 0.0, 1.0), 0.0);
        assert_eq!(map_clamped(15.0, 0.0, 10.0, 0.0, 1.0), 1.0);
        // Reversed input range
        assert_eq!(map_clamped(600.0, 600.0, 0.0, 0.5, 3.0), 0.5);
        assert_eq!(map_clamped(0.0, 600.0, 0.0, 0.5, 3.0), 3.0);
    }

    #[test]
    fn test_initialize_seeds_fifty_on_canvas() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        assert_eq!(system.shard_count(), 50);
        let colors = Palette::Crimson.shards();
        for shard in system.shards() {
            let p = shard.position();
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert_eq!(shard.life(), 255.0);
            assert!(colors.contains(&shard.color()));
        }
    }

    #[test]
    fn test_intensity_extremes() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        // Bottom of the canvas simmers
        ticked(&mut system, Vec2::new(400.0, 600.0), &mut rng);
        assert_eq!(system.intensity(), 0.5);

        // Top explodes
        ticked(&mut system, Vec2::new(400.0, 0.0), &mut rng);
        assert_eq!(system.intensity(), 3.0);

        // Outside the canvas clamps to the same extremes
        ticked(&mut system, Vec2::new(400.0, 900.0), &mut rng);
        assert_eq!(system.intensity(), 0.5);
        ticked(&mut system, Vec2::new(400.0, -300.0), &mut rng);
        assert_eq!(system.intensity(), 3.0);
    }

    #[test]
    fn test_spread_extremes() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        ticked(&mut system, Vec2::new(0.0, 300.0), &mut rng);
        assert_eq!(system.spread(), 0.5);
        ticked(&mut system, Vec2::new(800.0, 300.0), &mut rng);
        assert_eq!(system.spread(), 2.5);
    }

    #[test]
    fn test_palette_toggle_alternates() {
        let mut system = Anger::new(Palette::Crimson);
        system.on_pointer_down();
        assert_eq!(system.palette(), Palette::Scarlet);
        system.on_pointer_down();
        assert_eq!(system.palette(), Palette::Crimson);
    }

    #[test]
    fn test_pointer_down_arms_outburst() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);
        system.on_pointer_down();
        assert_eq!(system.outburst_remaining(), 10);

        ticked(&mut system, CANVAS * 0.5, &mut rng);
        assert_eq!(system.outburst_remaining(), 9);
    }

    #[test]
    fn test_cap_holds_through_outburst() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        // Repeated clicks at maximum intensity push spawning as hard as
        // the artwork ever does
        for i in 0..100u64 {
            if i % 5 == 0 {
                system.on_pointer_down();
            }
            let mut frame = Frame::new();
            system.tick(Vec2::new(800.0, 0.0), CANVAS, i, &mut rng, &mut frame);
            assert!(system.shard_count() <= MAX_SHARDS);
        }
    }

    #[test]
    fn test_two_hundred_quiet_ticks_stay_bounded() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        let pointer = Vec2::new(200.0, 450.0);
        let mut frame = Frame::new();
        for i in 0..200u64 {
            system.tick(pointer, CANVAS, i, &mut rng, &mut frame);
            assert!(system.shard_count() <= MAX_SHARDS);
        }
    }

    #[test]
    fn test_pressure_alpha_stays_clamped() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        let mut frame = Frame::new();
        for i in 0..300u64 {
            system.tick(Vec2::new(400.0, 0.0), CANVAS, i, &mut rng, &mut frame);
            assert!(system.pressure_alpha() >= 100.0);
            assert!(system.pressure_alpha() <= 255.0);
        }
    }

    #[test]
    fn test_first_frame_repaints_then_fades() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        let frame = ticked(&mut system, CANVAS * 0.5, &mut rng);
        match frame.commands()[0] {
            DrawCommand::Rect { color, size, .. } => {
                assert_eq!(color.w, 1.0);
                assert_eq!(size, CANVAS);
            }
            _ => panic!("expected the background rect first"),
        }

        let frame = ticked(&mut system, CANVAS * 0.5, &mut rng);
        match frame.commands()[0] {
            DrawCommand::Rect { color, .. } => {
                assert!((color.w - 10.0 / 255.0).abs() < 0.001)
            }
            _ => panic!("expected the fade rect first"),
        }
    }

    #[test]
    fn test_frame_orders_background_glow_shards() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        let frame = ticked(&mut system, CANVAS * 0.5, &mut rng);
        let commands = frame.commands();
        assert!(matches!(commands[0], DrawCommand::Rect { .. }));
        assert!(matches!(commands[1], DrawCommand::Disc { .. }));
        assert!(matches!(commands[2], DrawCommand::Disc { .. }));
        for command in &commands[3..] {
            assert!(matches!(command, DrawCommand::Segment { .. }));
        }
    }

    #[test]
    fn test_resize_reseeds() {
        let mut rng = rng();
        let mut system = Anger::new(Palette::Crimson);
        system.initialize(CANVAS, &mut rng);

        let mut frame = Frame::new();
        for i in 0..30u64 {
            system.tick(CANVAS * 0.5, CANVAS, i, &mut rng, &mut frame);
        }

        let resized = Vec2::new(1024.0, 768.0);
        system.on_resize(resized, &mut rng);
        assert_eq!(system.shard_count(), 50);
        for shard in system.shards() {
            let p = shard.position();
            assert!(p.x >= 0.0 && p.x < 1024.0);
            assert!(p.y >= 0.0 && p.y < 768.0);
        }
    }
}
