// Frame Buffer - Stores the logical pixel grid the engine draws into
//
// Each cell holds one packed 32-bit color laid out as 0xAARRGGBB.
// A zero cell is fully transparent black.

/// A single RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black (the value of a cleared cell)
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Opaque black
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 0xFF);

    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);

    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack the channels into a single cell value (0xAARRGGBB)
    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Decode a packed cell value back into its channels
    #[inline]
    pub const fn unpack(cell: u32) -> Self {
        Self {
            r: (cell >> 16) as u8,
            g: (cell >> 8) as u8,
            b: cell as u8,
            a: (cell >> 24) as u8,
        }
    }

    /// Channels in RGBA byte order, as expected by the display surface
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Logical frame buffer
///
/// Fixed-size grid of packed colors. The dimensions are chosen once at
/// construction and never change; `cells.len() == width * height` holds
/// for the whole lifetime of the buffer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new frame buffer with every cell cleared
    ///
    /// # Arguments
    /// * `width` - Logical width in pixels
    /// * `height` - Logical height in pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Logical width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Set a pixel at the given coordinates
    ///
    /// Coordinates outside the buffer are ignored; the write never touches
    /// a neighbouring cell.
    ///
    /// # Arguments
    /// * `x` - X coordinate
    /// * `y` - Y coordinate
    /// * `color` - Color to store
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = color.pack();
        }
    }

    /// Get the color at the given coordinates
    ///
    /// # Returns
    /// `None` when the coordinates are outside the buffer
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|index| Rgba::unpack(self.cells[index]))
    }

    /// Reset every cell to transparent black
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Get the raw packed cells
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Convert the frame buffer to RGBA bytes at 1:1 scale
    ///
    /// # Arguments
    /// * `output` - Output buffer (must be at least width * height * 4 bytes)
    ///
    /// # Panics
    /// Panics if output buffer is too small
    pub fn to_rgba(&self, output: &mut [u8]) {
        assert!(
            output.len() >= self.cells.len() * 4,
            "Output buffer too small for RGBA conversion"
        );

        for (pixel, &cell) in output.chunks_exact_mut(4).zip(self.cells.iter()) {
            pixel.copy_from_slice(&Rgba::unpack(cell).to_bytes());
        }
    }
}
