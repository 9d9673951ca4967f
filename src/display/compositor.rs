// Frame Compositor - Logical pixel buffer plus scaled presentation
//
// The engine draws into a small logical buffer in its native resolution.
// `present` turns the current buffer into a magnified frame on the display
// surface, which the window uploads on its next refresh.

use super::framebuffer::{FrameBuffer, Rgba};
use super::rotation::Rotation;
use super::surface::DisplaySurface;
use crate::engine::Screen;

/// Owns the logical frame buffer and the display surface it is presented to
pub struct FrameCompositor {
    buffer: FrameBuffer,
    surface: DisplaySurface,
    rotation: Rotation,
    /// Scratch image holding the logical buffer at 1:1
    staging: Vec<u8>,
    frames_presented: u64,
    frame_ready: bool,
}

impl FrameCompositor {
    /// Create a compositor for a `width` x `height` buffer presented at `scale`x
    pub fn new(width: usize, height: usize, scale: u32) -> Self {
        Self::with_rotation(width, height, scale, Rotation::Deg0)
    }

    /// Create a compositor whose engine-facing coordinates are rotated
    ///
    /// `width` and `height` describe the physical buffer; the engine sees
    /// them swapped for quarter-turn rotations.
    pub fn with_rotation(width: usize, height: usize, scale: u32, rotation: Rotation) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            surface: DisplaySurface::new(width, height, scale),
            rotation,
            staging: vec![0; width * height * 4],
            frames_presented: 0,
            frame_ready: false,
        }
    }

    /// Write one pixel; coordinates outside the screen are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        let (width, height) = (self.buffer.width(), self.buffer.height());
        if let Some((bx, by)) = self.rotation.map(x, y, width, height) {
            self.buffer.set_pixel(bx, by, color);
        }
    }

    /// Read back one pixel in engine coordinates
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let (bx, by) = self
            .rotation
            .map(x, y, self.buffer.width(), self.buffer.height())?;
        self.buffer.get_pixel(bx, by)
    }

    /// Reset the logical buffer to transparent black
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Present the logical buffer on the display surface
    pub fn present(&mut self) {
        self.buffer.to_rgba(&mut self.staging);
        self.surface.blit_scaled(&self.staging, self.buffer.width());
        self.frames_presented += 1;
        self.frame_ready = true;
    }

    /// Logical `(width, height)` as the engine sees it
    pub fn size(&self) -> (usize, usize) {
        self.rotation
            .logical_size(self.buffer.width(), self.buffer.height())
    }

    /// The most recently presented frame
    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    /// The logical buffer
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Rotation applied to engine coordinates
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Number of presents since creation
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Returns true once per present, for the host to upload the new frame
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }
}

impl Screen for FrameCompositor {
    fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        FrameCompositor::set_pixel(self, x, y, Rgba::new(r, g, b, a));
    }

    fn present(&mut self) {
        FrameCompositor::present(self);
    }

    fn clear(&mut self) {
        FrameCompositor::clear(self);
    }

    fn size(&self) -> (usize, usize) {
        FrameCompositor::size(self)
    }
}
