//! The square surface images are composited onto.
//!
//! A `SquareCanvas` is a plain `size x size` RGBA buffer. The background
//! renderer fills it first, then the compositor blits the source image on top
//! with source-over alpha blending, so a transparent subject never punches a
//! hole through its background.

use crate::decode::SourceImage;

/// A square RGBA raster buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareCanvas {
    /// Side length in pixels.
    pub size: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is size * size * 4.
    pub pixels: Vec<u8>,
}

impl SquareCanvas {
    /// Allocate a fully transparent canvas of the given side length.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![0u8; (size as usize) * (size as usize) * 4],
        }
    }

    /// Fill the entire canvas with one RGBA value.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Get the RGBA value at a pixel coordinate. Panics if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Draw a source image at the given offset with source-over blending.
    ///
    /// The image is drawn at its native pixel dimensions, never scaled. The
    /// caller guarantees the image fits: `offset + dimension <= size` must
    /// hold on both axes (the geometry resolver's contract).
    pub fn blit(&mut self, image: &SourceImage, offset_x: u32, offset_y: u32) {
        debug_assert!(offset_x + image.width <= self.size);
        debug_assert!(offset_y + image.height <= self.size);

        for y in 0..image.height {
            let src_row = (y * image.width * 4) as usize;
            let dst_row = (((offset_y + y) * self.size + offset_x) * 4) as usize;

            for x in 0..image.width as usize {
                let src = &image.pixels[src_row + x * 4..src_row + x * 4 + 4];
                let dst = &mut self.pixels[dst_row + x * 4..dst_row + x * 4 + 4];
                blend_source_over(src, dst);
            }
        }
    }
}

/// Source-over blend of one straight-alpha RGBA pixel onto another.
///
/// out = (src * sa + dst * (255 - sa)) / 255, rounded to nearest.
#[inline]
fn blend_source_over(src: &[u8], dst: &mut [u8]) {
    let sa = src[3] as u32;
    match sa {
        255 => dst.copy_from_slice(src),
        0 => {}
        _ => {
            let inv = 255 - sa;
            for c in 0..3 {
                dst[c] = ((src[c] as u32 * sa + dst[c] as u32 * inv + 127) / 255) as u8;
            }
            dst[3] = (sa + (dst[3] as u32 * inv + 127) / 255) as u8;
        }
    }
}
