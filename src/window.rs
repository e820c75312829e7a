//! Window host for the artwork.
//!
//! Owns the winit event loop, the renderer, and the particle system, and
//! wires them together: pointer events feed [`Input`], each redraw runs
//! one [`Anger::tick`] and hands the resulting [`Frame`] to the renderer.
//!
//! # Usage
//!
//! ```ignore
//! use anger::window::{run, RunOptions};
//!
//! fn main() {
//!     run(RunOptions::default()).unwrap();
//! }
//! ```

use std::sync::Arc;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::frame::Frame;
use crate::gpu::Renderer;
use crate::input::Input;
use crate::palette::Palette;
use crate::system::Anger;
use crate::time::Time;

/// How often the window title is refreshed, in frames.
const TITLE_REFRESH_FRAMES: u64 = 30;

/// Options for running the artwork.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Starting palette. Clicking toggles from here.
    pub palette: Palette,
    /// Fixed RNG seed for deterministic playback; `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
    /// Window title prefix.
    pub title: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            seed: None,
            title: "Anger".to_string(),
        }
    }
}

/// Run the artwork in a window. Blocks until the window is closed or
/// Escape is pressed.
pub fn run(options: RunOptions) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(options);
    event_loop.run_app(&mut app)?;

    // Setup failures inside `resumed` are stashed and surfaced here
    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    options: RunOptions,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    system: Anger,
    input: Input,
    time: Time,
    rng: SmallRng,
    frame: Frame,
    init_error: Option<RunError>,
}

impl App {
    fn new(options: RunOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            system: Anger::new(options.palette),
            options,
            window: None,
            renderer: None,
            input: Input::new(),
            time: Time::new(),
            rng,
            frame: Frame::new(),
            init_error: None,
        }
    }

    fn canvas(&self) -> Vec2 {
        match &self.renderer {
            Some(renderer) => Vec2::new(renderer.config.width as f32, renderer.config.height as f32),
            None => Vec2::ZERO,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let canvas = self.canvas();
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        self.time.update();

        if self.input.pointer_pressed() {
            self.system.on_pointer_down();
        }

        self.system.tick(
            self.input.pointer(),
            canvas,
            self.time.frame(),
            &mut self.rng,
            &mut self.frame,
        );
        self.input.begin_frame();

        match renderer.render(&self.frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => renderer.resize(winit::dpi::PhysicalSize {
                width: renderer.config.width,
                height: renderer.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            if self.time.frame() % TITLE_REFRESH_FRAMES == 0 {
                window.set_title(&format!(
                    "{} | {} shards | {:.0} fps",
                    self.options.title,
                    self.system.shard_count(),
                    self.time.fps(),
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.options.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.window = Some(window);
                let canvas = self.canvas();
                self.system.initialize(canvas, &mut self.rng);
            }
            Err(e) => {
                self.init_error = Some(RunError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                let canvas = self.canvas();
                if canvas.x > 0.0 && canvas.y > 0.0 {
                    self.system.on_resize(canvas, &mut self.rng);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
