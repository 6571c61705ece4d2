//! Square canvas geometry.
//!
//! Given a source image's dimensions, this module computes the side length of
//! the square canvas the image will be padded onto and the offset that centers
//! the image on it. The longer dimension always gets offset 0; the shorter
//! dimension is centered with integer (floor) division.

use thiserror::Error;

/// Errors from geometry resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Placement of a source image on its square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SquareGeometry {
    /// Side length of the square canvas (max of source width and height).
    pub size: u32,
    /// Horizontal offset of the source image's left edge.
    pub offset_x: u32,
    /// Vertical offset of the source image's top edge.
    pub offset_y: u32,
}

/// Compute the square canvas size and centering offset for a source image.
///
/// # Arguments
///
/// * `width` - Source image width in pixels (must be > 0)
/// * `height` - Source image height in pixels (must be > 0)
///
/// # Returns
///
/// A `SquareGeometry` with `size = max(width, height)` and the offsets that
/// center the source image. When `size - dimension` is odd the extra pixel
/// lands on the bottom/right side (floor division).
///
/// # Errors
///
/// Returns `GeometryError::InvalidDimensions` if either dimension is zero.
pub fn resolve(width: u32, height: u32) -> Result<SquareGeometry, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::InvalidDimensions { width, height });
    }

    let size = width.max(height);
    Ok(SquareGeometry {
        size,
        offset_x: (size - width) / 2,
        offset_y: (size - height) / 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_image() {
        let geo = resolve(400, 300).unwrap();
        assert_eq!(geo.size, 400);
        assert_eq!(geo.offset_x, 0);
        assert_eq!(geo.offset_y, 50);
    }

    #[test]
    fn test_portrait_image() {
        let geo = resolve(300, 400).unwrap();
        assert_eq!(geo.size, 400);
        assert_eq!(geo.offset_x, 50);
        assert_eq!(geo.offset_y, 0);
    }

    #[test]
    fn test_square_image() {
        let geo = resolve(256, 256).unwrap();
        assert_eq!(geo.size, 256);
        assert_eq!(geo.offset_x, 0);
        assert_eq!(geo.offset_y, 0);
    }

    #[test]
    fn test_odd_difference_floors() {
        // 10 - 3 = 7, floor(7 / 2) = 3
        let geo = resolve(10, 3).unwrap();
        assert_eq!(geo.offset_y, 3);
        // Extra pixel goes below the image
        assert_eq!(geo.size - (geo.offset_y + 3), 4);
    }

    #[test]
    fn test_one_pixel_image() {
        let geo = resolve(1, 1).unwrap();
        assert_eq!(geo.size, 1);
        assert_eq!(geo.offset_x, 0);
        assert_eq!(geo.offset_y, 0);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = resolve(0, 100);
        assert_eq!(
            result,
            Err(GeometryError::InvalidDimensions {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(matches!(
            resolve(100, 0),
            Err(GeometryError::InvalidDimensions { .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
