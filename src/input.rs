//! Pointer input tracking.
//!
//! The `Input` struct provides a clean abstraction over raw window events,
//! tracking both the continuous pointer position and the instantaneous
//! press edge the artwork reacts to (palette toggle + outburst).
//!
//! # Usage
//!
//! The host feeds it winit events and clears the per-frame state after
//! each tick:
//!
//! ```ignore
//! input.handle_event(&event);
//!
//! // Once per frame:
//! if input.pointer_pressed() {
//!     system.on_pointer_down();
//! }
//! system.tick(input.pointer(), canvas, frame, &mut rng, &mut commands);
//! input.begin_frame();
//! ```

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Pointer state tracking over raw window events.
///
/// Tracks the pointer position plus both instantaneous (pressed this
/// frame) and continuous (currently held) left-button state.
#[derive(Debug, Default)]
pub struct Input {
    position: Vec2,
    pressed: bool,
    held: bool,
}

impl Input {
    /// Create a new input tracker with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer position in physical pixels.
    pub fn pointer(&self) -> Vec2 {
        self.position
    }

    /// Whether the left button was pressed this frame (just went down).
    pub fn pointer_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the left button is currently held down.
    pub fn pointer_held(&self) -> bool {
        self.held
    }

    /// Called once per frame after the tick to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.pressed = false;
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            if !self.held {
                                self.pressed = true;
                            }
                            self.held = true;
                        }
                        ElementState::Released => {
                            self.held = false;
                        }
                    }
                }
            }

            _ => {}
        }
    }
}
