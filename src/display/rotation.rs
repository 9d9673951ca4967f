// Rotation - Maps engine coordinates onto a rotated frame buffer
//
// Devices mounted sideways expose a rotated coordinate space to the engine
// while the frame buffer itself keeps its native orientation.

use serde::{Deserialize, Serialize};

/// Clockwise rotation of the engine's view of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Native orientation
    #[default]
    Deg0,
    /// Rotated a quarter turn clockwise
    Deg90,
    /// Upside down
    Deg180,
    /// Rotated a quarter turn counter-clockwise
    Deg270,
}

impl Rotation {
    /// Dimensions the engine sees for a buffer of `width` x `height`
    pub fn logical_size(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => (width, height),
            Rotation::Deg90 | Rotation::Deg270 => (height, width),
        }
    }

    /// Map an engine coordinate to a buffer coordinate
    ///
    /// `width` and `height` are the unrotated buffer dimensions. Coordinates
    /// outside the engine's view map to `None`.
    pub fn map(self, x: i32, y: i32, width: usize, height: usize) -> Option<(i32, i32)> {
        let (view_w, view_h) = self.logical_size(width, height);
        if x < 0 || y < 0 || x as usize >= view_w || y as usize >= view_h {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let (bx, by) = match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (width - 1 - y, x),
            Rotation::Deg180 => (width - 1 - x, height - 1 - y),
            Rotation::Deg270 => (y, height - 1 - x),
        };
        Some((i32::try_from(bx).ok()?, i32::try_from(by).ok()?))
    }
}
