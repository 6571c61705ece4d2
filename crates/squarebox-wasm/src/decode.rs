//! Image loading WASM bindings.
//!
//! The UI hands over raw file bytes from `File.arrayBuffer()`; decoding
//! happens here in WASM (PNG/JPEG/GIF, with EXIF orientation applied) so the
//! engine always works on plain RGBA buffers.
//!
//! # Example
//!
//! ```typescript
//! import { load_image } from '@squarebox/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = load_image(bytes, file.name);
//! console.log(`Loaded ${image.width}x${image.height} as "${image.name}"`);
//! ```

use crate::types::JsSourceImage;
use squarebox_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image file into a source image handle.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array` (PNG, JPEG or GIF)
/// * `name` - Display name, typically `file.name`, used for output naming
///
/// # Returns
///
/// A `JsSourceImage` with RGBA pixel data, or an error if decoding fails.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized raster format or the
/// file is corrupted.
#[wasm_bindgen]
pub fn load_image(bytes: &[u8], name: &str) -> Result<JsSourceImage, JsValue> {
    decode::decode_image(bytes, name)
        .map(JsSourceImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
