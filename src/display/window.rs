// Window module - Manages the display window and the refresh loop
//
// The window owns the frame compositor, the input aggregator and the
// engine handle. Each due refresh relays held keys, steps the engine and
// uploads the latest presented frame using the winit and pixels crates.

use super::clock::FrameClock;
use super::compositor::FrameCompositor;
use super::rotation::Rotation;
use crate::config::ScreenConfig;
use crate::engine::SharedEngine;
use crate::error::ScreenError;
use crate::input::{InputAggregator, InputConfig, KeySymbolizer};
use log::{debug, error, info};
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Largest supported magnification
pub const MAX_SCALE: u32 = 16;

/// Largest magnified width or height, the default GPU texture limit
pub const MAX_SURFACE_SIZE: u32 = 8192;

/// Window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical screen width in pixels
    pub width: usize,
    /// Logical screen height in pixels
    pub height: usize,
    /// Scale factor (1x, 2x, 3x, 4x, etc.)
    pub scale: u32,
    /// Target refresh rate in Hz
    pub target_fps: u32,
    /// Whether the pixels surface waits for the display's vertical sync
    pub vsync: bool,
    /// Rotation of the engine's coordinate space
    pub rotation: Rotation,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 128x64 screen, 5x scale, 60 FPS, VSync enabled
    pub fn new() -> Self {
        Self {
            width: 128,
            height: 64,
            scale: 5,
            target_fps: 60,
            vsync: true,
            rotation: Rotation::Deg0,
        }
    }

    /// Set the logical screen size
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, MAX_SCALE);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set the rotation of the engine's coordinate space
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Get the window width in pixels, saturating at `u32::MAX`
    pub fn window_width(&self) -> u32 {
        magnify(self.width, self.scale)
    }

    /// Get the window height in pixels, saturating at `u32::MAX`
    pub fn window_height(&self) -> u32 {
        magnify(self.height, self.scale)
    }

    /// Get the frame duration for the target FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps.max(1) as u64)
    }

    /// Validate values that may come from a config file
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "screen size {}x{} must be non-zero",
                self.width, self.height
            ));
        }
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(format!(
                "scale {} must be between 1 and {}",
                self.scale, MAX_SCALE
            ));
        }
        if self.window_width() > MAX_SURFACE_SIZE || self.window_height() > MAX_SURFACE_SIZE {
            return Err(format!(
                "screen size {}x{} at scale {} exceeds {} pixels per side",
                self.width, self.height, self.scale, MAX_SURFACE_SIZE
            ));
        }
        if self.target_fps == 0 {
            return Err("target_fps must be at least 1".to_string());
        }
        Ok(())
    }
}

fn magnify(logical: usize, scale: u32) -> u32 {
    u32::try_from(logical)
        .ok()
        .and_then(|logical| logical.checked_mul(scale))
        .unwrap_or(u32::MAX)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen window - composition root of the front-end
pub struct ScreenWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    input_config: InputConfig,
    compositor: FrameCompositor,
    aggregator: InputAggregator,
    symbolizer: KeySymbolizer,
    engine: SharedEngine,
    clock: FrameClock,
    error: Option<ScreenError>,
}

impl ScreenWindow {
    /// Create a new screen window (the OS window is created when the event loop starts)
    pub fn new(config: WindowConfig, input_config: InputConfig, engine: SharedEngine) -> Self {
        Self {
            window: None,
            pixels: None,
            compositor: FrameCompositor::with_rotation(
                config.width,
                config.height,
                config.scale,
                config.rotation,
            ),
            aggregator: InputAggregator::with_touch_symbol(input_config.touch_symbol.clone()),
            symbolizer: KeySymbolizer::new(),
            clock: FrameClock::with_duration(config.frame_duration()),
            config,
            input_config,
            engine,
            error: None,
        }
    }

    /// Get a reference to the frame compositor
    pub fn compositor(&self) -> &FrameCompositor {
        &self.compositor
    }

    /// Get a reference to the input aggregator
    pub fn aggregator(&self) -> &InputAggregator {
        &self.aggregator
    }

    /// Get a mutable reference to the input aggregator
    pub fn aggregator_mut(&mut self) -> &mut InputAggregator {
        &mut self.aggregator
    }

    /// Run one display refresh without rendering
    ///
    /// Attaches the engine's key sink once the engine reports ready, relays
    /// held keys, then lets the engine advance.
    pub fn refresh(&mut self) {
        if !self.aggregator.has_sink() && self.engine.is_ready() {
            info!("Engine ready, attaching key relay");
            self.aggregator.register_sink(self.engine.sink());
        }
        self.aggregator.tick();
        self.engine.step(&mut self.compositor);
    }

    /// Deadline to sleep until before the next refresh
    ///
    /// Returns `None` once a refresh is due at `now`, so the caller should
    /// request a redraw instead of waiting.
    pub fn next_wake(&self, now: Instant) -> Option<Instant> {
        self.clock.next_deadline().filter(|&deadline| deadline > now)
    }

    /// Handle a touch or click that should act as a touch
    pub fn handle_touch(&mut self) {
        self.aggregator.on_touch_start();
    }

    /// Handle the window gaining or losing keyboard focus
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused && self.input_config.release_on_focus_loss {
            debug!("Focus lost, releasing held keys");
            self.aggregator.release_all();
            self.symbolizer.reset();
        }
    }

    fn handle_key_event(&mut self, event: KeyEvent) {
        match event.state {
            ElementState::Pressed => {
                if let Some(symbol) = self.symbolizer.press(event.physical_key, &event.logical_key)
                {
                    self.aggregator.on_key_down(&symbol);
                }
            }
            ElementState::Released => {
                if let Some(symbol) = self
                    .symbolizer
                    .release(event.physical_key, &event.logical_key)
                {
                    self.aggregator.on_key_up(&symbol);
                }
            }
        }
    }

    /// Upload a newly presented frame and draw it to the window
    fn render(&mut self) -> Result<(), pixels::Error> {
        if let Some(pixels) = &mut self.pixels {
            if self.compositor.take_frame() {
                pixels
                    .frame_mut()
                    .copy_from_slice(self.compositor.surface().as_bytes());
            }
            pixels.render()?;
        }
        Ok(())
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ScreenError> {
        let window_attributes = Window::default_attributes()
            .with_title(format!(
                "Screen Emulator - {}x{}",
                self.config.window_width(),
                self.config.window_height()
            ))
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels = PixelsBuilder::new(
            self.compositor.surface().width(),
            self.compositor.surface().height(),
            surface_texture,
        )
        .enable_vsync(self.config.vsync)
        .build()?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ScreenError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for ScreenWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key_event(event);
            }
            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                self.handle_touch();
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if self.input_config.mouse_as_touch => {
                self.handle_touch();
            }
            WindowEvent::Focused(focused) => {
                self.handle_focus(focused);
            }
            WindowEvent::RedrawRequested => {
                if self.clock.poll(Instant::now()) {
                    self.refresh();
                    if let Err(err) = self.render() {
                        self.fail(event_loop, err.into());
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.next_wake(Instant::now()) {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }
}

/// Create and run the screen window until it is closed
///
/// # Arguments
/// * `config` - Front-end configuration
/// * `engine` - Engine driving the screen
pub fn run_screen(config: &ScreenConfig, engine: SharedEngine) -> Result<(), ScreenError> {
    config.validate()?;
    let video = config.video;

    let event_loop = EventLoop::new()?;
    // Sleeps between refreshes are scheduled from the frame clock
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut screen = ScreenWindow::new(video, config.input.clone(), engine);

    info!("Starting screen window...");
    info!("  Resolution: {}x{}", video.width, video.height);
    info!(
        "  Window size: {}x{}",
        video.window_width(),
        video.window_height()
    );
    info!("  Scale: {}x", video.scale);
    info!("  Target FPS: {}", video.target_fps);
    info!("  VSync: {}", video.vsync);
    info!("  Rotation: {:?}", video.rotation);

    event_loop.run_app(&mut screen)?;

    match screen.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
