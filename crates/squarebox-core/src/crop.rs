//! Crop mapping for image backgrounds.
//!
//! The cropping UI lets the user drag a 1:1 rectangle over an arbitrary
//! image; this module turns that rectangle into a square background asset by
//! copying out exactly the selected pixel block. The asset is then cached on
//! the session and reused for every composite until replaced.

use crate::decode::SourceImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from crop mapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// The region is not 1:1. The crop UI pins the aspect ratio, so this is
    /// a caller contract violation.
    #[error("Crop region must be square, got {width}x{height}")]
    NonSquareCrop { width: u32, height: u32 },

    /// The region has zero size.
    #[error("Crop region is empty")]
    EmptyRegion,

    /// The region extends past the source image.
    #[error(
        "Crop region {x},{y} {width}x{height} exceeds source bounds {source_width}x{source_height}"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },
}

/// A crop rectangle in the source image's pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Region width.
    pub width: u32,
    /// Region height (the UI pins this equal to width).
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region is 1:1.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Copy a square region out of a source image as a new background asset.
///
/// The output is exactly `region.width x region.width`, containing the
/// source pixels in `[x, x + width) x [y, y + height)` and nothing else.
///
/// # Errors
///
/// * `CropError::NonSquareCrop` if `width != height`
/// * `CropError::EmptyRegion` if the region has zero size
/// * `CropError::RegionOutOfBounds` if the region does not fit the source;
///   clamping would silently deliver different pixels than the user chose,
///   so an oversized region is rejected instead
pub fn crop_square(image: &SourceImage, region: CropRegion) -> Result<SourceImage, CropError> {
    if !region.is_square() {
        return Err(CropError::NonSquareCrop {
            width: region.width,
            height: region.height,
        });
    }
    if region.width == 0 {
        return Err(CropError::EmptyRegion);
    }
    let in_bounds = region
        .x
        .checked_add(region.width)
        .is_some_and(|right| right <= image.width)
        && region
            .y
            .checked_add(region.height)
            .is_some_and(|bottom| bottom <= image.height);
    if !in_bounds {
        return Err(CropError::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            source_width: image.width,
            source_height: image.height,
        });
    }

    let side = region.width as usize;
    let mut output = Vec::with_capacity(side * side * 4);

    // Copy row by row
    for y in 0..region.height {
        let src_y = region.y + y;
        let row_start = ((src_y * image.width + region.x) * 4) as usize;
        output.extend_from_slice(&image.pixels[row_start..row_start + side * 4]);
    }

    Ok(SourceImage::new(
        image.name.clone(),
        region.width,
        region.width,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel encodes its position.
    fn test_image(width: u32, height: u32) -> SourceImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((x + y) % 256) as u8);
                pixels.push(255);
            }
        }
        SourceImage::new("grid.png", width, height, pixels)
    }

    #[test]
    fn test_crop_extracts_exact_block() {
        let img = test_image(1000, 1000);
        let region = CropRegion::new(100, 100, 200, 200);
        let asset = crop_square(&img, region).unwrap();

        assert_eq!(asset.width, 200);
        assert_eq!(asset.height, 200);

        // Every output pixel matches the source pixel at the offset position
        for y in 0..200 {
            for x in 0..200 {
                assert_eq!(
                    asset.pixel_at(x, y),
                    img.pixel_at(100 + x, 100 + y),
                    "mismatch at {},{}",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_crop_keeps_source_name() {
        let img = test_image(10, 10);
        let asset = crop_square(&img, CropRegion::new(0, 0, 4, 4)).unwrap();
        assert_eq!(asset.name, "grid.png");
    }

    #[test]
    fn test_crop_full_image() {
        let img = test_image(16, 16);
        let asset = crop_square(&img, CropRegion::new(0, 0, 16, 16)).unwrap();
        assert_eq!(asset.pixels, img.pixels);
    }

    #[test]
    fn test_crop_single_pixel() {
        let img = test_image(8, 8);
        let asset = crop_square(&img, CropRegion::new(3, 5, 1, 1)).unwrap();
        assert_eq!(asset.pixel_at(0, 0), img.pixel_at(3, 5));
    }

    #[test]
    fn test_non_square_region_rejected() {
        let img = test_image(100, 100);
        let result = crop_square(&img, CropRegion::new(0, 0, 50, 40));
        assert_eq!(
            result,
            Err(CropError::NonSquareCrop {
                width: 50,
                height: 40
            })
        );
    }

    #[test]
    fn test_empty_region_rejected() {
        let img = test_image(100, 100);
        assert_eq!(
            crop_square(&img, CropRegion::new(10, 10, 0, 0)),
            Err(CropError::EmptyRegion)
        );
    }

    #[test]
    fn test_out_of_bounds_region_rejected() {
        let img = test_image(100, 100);
        let result = crop_square(&img, CropRegion::new(60, 60, 50, 50));
        assert!(matches!(result, Err(CropError::RegionOutOfBounds { .. })));
    }

    #[test]
    fn test_region_at_far_edge_accepted() {
        let img = test_image(100, 100);
        let asset = crop_square(&img, CropRegion::new(90, 90, 10, 10)).unwrap();
        assert_eq!(asset.pixel_at(9, 9), img.pixel_at(99, 99));
    }

    #[test]
    fn test_overflowing_coordinates_rejected() {
        let img = test_image(100, 100);
        let result = crop_square(&img, CropRegion::new(u32::MAX, 0, 2, 2));
        assert!(matches!(result, Err(CropError::RegionOutOfBounds { .. })));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
