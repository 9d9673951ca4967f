// Display module - Handles the frame buffer and its presentation
//
// This module provides:
// - Logical frame buffer of packed RGBA cells
// - Display surface holding the magnified frame
// - Frame compositor tying the two together
// - Refresh pacing and the winit + pixels window

pub mod clock;
pub mod compositor;
pub mod framebuffer;
pub mod rotation;
pub mod surface;
pub mod window;

pub use clock::FrameClock;
pub use compositor::FrameCompositor;
pub use framebuffer::{FrameBuffer, Rgba};
pub use rotation::Rotation;
pub use surface::DisplaySurface;
pub use window::{run_screen, ScreenWindow, WindowConfig};
