//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! SquareBox types, handling the conversion between Rust and JavaScript data
//! representations.

use squarebox_core::SourceImage;
use wasm_bindgen::prelude::*;

/// A loaded source image wrapper for JavaScript.
///
/// Wraps the core `SourceImage` and exposes its dimensions, display name and
/// pixel data to JS.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it out to a
/// JavaScript `Uint8Array`. wasm-bindgen's finalizer releases the WASM-side
/// buffer automatically; call `free()` to release it eagerly for large images.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `name` - Display name used to derive the output filename
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, name: String, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            inner: SourceImage::new(name, width, height, pixels),
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the display name
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    /// Create a JsSourceImage from a core SourceImage.
    pub(crate) fn from_source(inner: SourceImage) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core image.
    pub(crate) fn as_source(&self) -> &SourceImage {
        &self.inner
    }

    /// Clone out the wrapped core image.
    pub(crate) fn to_source(&self) -> SourceImage {
        self.inner.clone()
    }

    /// Move the wrapped core image out.
    pub(crate) fn into_source(self) -> SourceImage {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_source_image_creation() {
        let img = JsSourceImage::new(100, 50, "a.png".to_string(), vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.name(), "a.png");
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_source_image_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 32, 16, 8, 255]; // 2 RGBA pixels
        let img = JsSourceImage::new(2, 1, "two.png".to_string(), pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_source_round_trip() {
        let source = SourceImage::new("b.png", 4, 4, vec![9u8; 4 * 4 * 4]);
        let js_img = JsSourceImage::from_source(source.clone());
        assert_eq!(js_img.to_source(), source);
        assert_eq!(js_img.into_source(), source);
    }
}
