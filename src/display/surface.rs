// Display surface - The magnified image handed to the window
//
// The surface is `scale` times larger than the logical frame buffer in each
// direction. It only ever receives copies of the logical image, so the
// engine-facing buffer and the presented frame never alias.

/// Physical RGBA8 image that the window uploads each frame
#[derive(Debug, Clone)]
pub struct DisplaySurface {
    width: u32,
    height: u32,
    scale: u32,
    pixels: Vec<u8>,
}

impl DisplaySurface {
    /// Create a surface for a logical image of `width` x `height` at `scale`x
    ///
    /// # Panics
    /// Panics if a magnified dimension does not fit in a `u32`
    pub fn new(logical_width: usize, logical_height: usize, scale: u32) -> Self {
        let scale = scale.max(1);
        let width = physical_extent(logical_width, scale);
        let height = physical_extent(logical_height, scale);
        Self {
            width,
            height,
            scale,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Physical width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Magnification factor
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// RGBA bytes of the whole surface, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of one physical pixel as `[r, g, b, a]`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(rgba)
    }

    /// Reset the whole surface to transparent black
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Draw a 1:1 logical image over the full surface with nearest-neighbor sampling
    ///
    /// The surface is cleared first, so nothing from the previous frame
    /// survives, transparent source pixels included.
    ///
    /// # Arguments
    /// * `source` - RGBA bytes of the logical image
    /// * `source_width` - Logical width in pixels
    ///
    /// # Panics
    /// Panics if `source` does not match the surface's logical dimensions
    pub fn blit_scaled(&mut self, source: &[u8], source_width: usize) {
        let scale = self.scale as usize;
        let source_height = self.height as usize / scale;
        assert_eq!(
            source_width * scale,
            self.width as usize,
            "Source width does not match surface"
        );
        assert_eq!(
            source.len(),
            source_width * source_height * 4,
            "Source image does not match surface"
        );

        self.clear();
        if source_width == 0 || source_height == 0 {
            return;
        }

        let row_bytes = self.width as usize * 4;
        for (sy, source_row) in source.chunks_exact(source_width * 4).enumerate() {
            // Expand the first physical row of this block, then duplicate it
            let first_row = sy * scale * row_bytes;
            {
                let row = &mut self.pixels[first_row..first_row + row_bytes];
                for (block, pixel) in row
                    .chunks_exact_mut(scale * 4)
                    .zip(source_row.chunks_exact(4))
                {
                    for dst in block.chunks_exact_mut(4) {
                        dst.copy_from_slice(pixel);
                    }
                }
            }
            for dy in 1..scale {
                let start = first_row + dy * row_bytes;
                self.pixels
                    .copy_within(first_row..first_row + row_bytes, start);
            }
        }
    }
}

fn physical_extent(logical: usize, scale: u32) -> u32 {
    match u32::try_from(logical)
        .ok()
        .and_then(|logical| logical.checked_mul(scale))
    {
        Some(extent) => extent,
        None => panic!("Surface dimensions overflow"),
    }
}
