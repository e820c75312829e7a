//! Drawing primitives emitted by the core.
//!
//! The particle system never touches the GPU. Each tick it fills a [`Frame`]
//! with an ordered list of [`DrawCommand`]s — filled rectangles, filled
//! discs, and stroked line segments — and the rendering surface consumes
//! them in order. This keeps the simulation testable without a window.
//!
//! All coordinates are in canvas pixels, origin top-left, y down.

use glam::{Vec2, Vec4};

/// A single drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle. Used for the background repaint and
    /// the per-frame translucent fade.
    Rect {
        /// Top-left corner.
        min: Vec2,
        /// Width and height.
        size: Vec2,
        /// Fill color (RGBA, 0-1).
        color: Vec4,
    },

    /// Filled disc. Used for the two concentric pressure-point circles.
    Disc {
        /// Disc center.
        center: Vec2,
        /// Disc radius.
        radius: f32,
        /// Fill color (RGBA, 0-1).
        color: Vec4,
    },

    /// Stroked line segment, centered on a point and rotated. Used for
    /// shards.
    Segment {
        /// Segment midpoint.
        center: Vec2,
        /// Rotation in radians.
        angle: f32,
        /// Total segment length.
        len: f32,
        /// Stroke width.
        width: f32,
        /// Stroke color (RGBA, 0-1).
        color: Vec4,
    },
}

/// The ordered draw list for one tick.
///
/// Reused across ticks by the host to avoid reallocating; [`crate::system::Anger::tick`]
/// clears it before filling it.
#[derive(Debug, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The commands in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push_rect(&mut self, min: Vec2, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    pub fn push_disc(&mut self, center: Vec2, radius: f32, color: Vec4) {
        self.commands.push(DrawCommand::Disc { center, radius, color });
    }

    pub fn push_segment(&mut self, center: Vec2, angle: f32, len: f32, width: f32, color: Vec4) {
        self.commands.push(DrawCommand::Segment {
            center,
            angle,
            len,
            width,
            color,
        });
    }
}
