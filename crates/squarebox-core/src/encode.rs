//! PNG encoding for export.
//!
//! Composited canvases are exported losslessly as RGBA PNG so the subject
//! pixels survive the round trip byte-for-byte. Encoding is deterministic:
//! the same canvas always yields the same bytes, which the export layer
//! relies on when a user downloads the same image twice.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 32 * 32 * 4];
        let png = encode_png(&pixels, 32, 32).unwrap();
        assert_eq!(&png[0..8], PNG_MAGIC);
    }

    #[test]
    fn test_encode_png_round_trips_losslessly() {
        let mut pixels = Vec::with_capacity(8 * 8 * 4);
        for i in 0..8 * 8 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i * 3 % 256) as u8, 7, 200]);
        }

        let png = encode_png(&pixels, 8, 8).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.as_raw(), &pixels);
    }

    #[test]
    fn test_encode_png_deterministic() {
        let pixels = vec![42u8; 16 * 16 * 4];
        let a = encode_png(&pixels, 16, 16).unwrap();
        let b = encode_png(&pixels, 16, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data() {
        let pixels = vec![128u8; 31 * 32 * 4]; // One row short
        let result = encode_png(&pixels, 32, 32);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 32);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&[], 32, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_single_pixel() {
        let png = encode_png(&[255, 0, 0, 255], 1, 1).unwrap();
        assert_eq!(&png[0..8], PNG_MAGIC);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
