//! Background specification WASM bindings.
//!
//! The UI's background controls build a [`JsBackgroundSpec`] and pass it to
//! the compositing calls as an immutable snapshot. Colors arrive as CSS hex
//! strings straight from `<input type="color">`, directions as kebab-case
//! names or raw drag angles that get snapped to the nearest of the 8 compass
//! directions.
//!
//! # Example
//!
//! ```typescript
//! import { JsBackgroundSpec, crop_background_asset } from '@squarebox/wasm';
//!
//! const solid = JsBackgroundSpec.solid('#e6b89c');
//! const grad = JsBackgroundSpec.gradient('#ffffff', '#cdb4db', 'bottom-right');
//!
//! // Image mode: crop a square out of an uploaded picture first
//! const asset = crop_background_asset(picture, { x: 100, y: 100, width: 200, height: 200 });
//! const img = JsBackgroundSpec.image(asset);
//! ```

use crate::types::JsSourceImage;
use squarebox_core::{crop_square, BackgroundSpec, Color, CropRegion, GradientDirection};
use wasm_bindgen::prelude::*;

/// An immutable background snapshot for compositing calls.
#[wasm_bindgen]
pub struct JsBackgroundSpec {
    inner: BackgroundSpec,
}

#[wasm_bindgen]
impl JsBackgroundSpec {
    /// Solid-color background from a CSS hex string (`#rrggbb`).
    pub fn solid(color: &str) -> Result<JsBackgroundSpec, JsValue> {
        let color = Color::from_hex(color).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsBackgroundSpec {
            inner: BackgroundSpec::solid(color),
        })
    }

    /// Linear gradient background along a named compass direction
    /// (`"right"`, `"bottom-left"`, ...).
    pub fn gradient(start: &str, end: &str, direction: &str) -> Result<JsBackgroundSpec, JsValue> {
        let start = Color::from_hex(start).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let end = Color::from_hex(end).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let direction = GradientDirection::from_name(direction).ok_or_else(|| {
            JsValue::from_str(&format!("Unknown gradient direction: {}", direction))
        })?;

        Ok(JsBackgroundSpec {
            inner: BackgroundSpec::gradient(start, end, direction),
        })
    }

    /// Linear gradient background from a raw angle in degrees (screen
    /// coordinates, y down). The angle is snapped to the nearest of the 8
    /// compass directions.
    pub fn gradient_from_angle(
        start: &str,
        end: &str,
        degrees: f32,
    ) -> Result<JsBackgroundSpec, JsValue> {
        JsBackgroundSpec::gradient(start, end, GradientDirection::from_degrees(degrees).name())
    }

    /// Image background from a pre-cropped square asset.
    pub fn image(asset: &JsSourceImage) -> JsBackgroundSpec {
        JsBackgroundSpec {
            inner: BackgroundSpec::image(asset.to_source()),
        }
    }

    /// The active mode tag: `"solid"`, `"gradient"` or `"image"`.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().name().to_string()
    }
}

impl JsBackgroundSpec {
    /// Borrow the wrapped core spec.
    pub(crate) fn as_spec(&self) -> &BackgroundSpec {
        &self.inner
    }
}

/// Crop a square region out of an image for use as a background asset.
///
/// # Arguments
///
/// * `source` - The image the user is cropping
/// * `region` - A `{ x, y, width, height }` object in the image's pixel
///   coordinates; the crop UI pins `width == height`
///
/// # Returns
///
/// A new square `JsSourceImage` containing exactly the selected pixels.
///
/// # Errors
///
/// Returns an error if the region is not square, is empty, or extends past
/// the image bounds.
#[wasm_bindgen]
pub fn crop_background_asset(
    source: &JsSourceImage,
    region: JsValue,
) -> Result<JsSourceImage, JsValue> {
    let region: CropRegion = serde_wasm_bindgen::from_value(region)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop region: {}", e)))?;

    crop_square(source.as_source(), region)
        .map(JsSourceImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Snap a raw angle in degrees to the nearest compass direction name.
///
/// Useful for live feedback while the user drags the gradient handle.
#[wasm_bindgen]
pub fn snap_gradient_angle(degrees: f32) -> String {
    GradientDirection::from_degrees(degrees).name().to_string()
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_solid_spec_from_hex() {
        let spec = JsBackgroundSpec::solid("#ffffff").unwrap();
        assert_eq!(spec.mode(), "solid");
    }

    #[wasm_bindgen_test]
    fn test_solid_spec_rejects_bad_color() {
        assert!(JsBackgroundSpec::solid("chartreuse").is_err());
    }

    #[wasm_bindgen_test]
    fn test_gradient_spec_rejects_bad_direction() {
        assert!(JsBackgroundSpec::gradient("#000000", "#ffffff", "sideways").is_err());
    }

    #[wasm_bindgen_test]
    fn test_gradient_from_angle_snaps() {
        let spec = JsBackgroundSpec::gradient_from_angle("#000000", "#ffffff", 50.0).unwrap();
        assert_eq!(spec.mode(), "gradient");
    }

    #[wasm_bindgen_test]
    fn test_crop_background_asset() {
        let pixels = vec![128u8; 10 * 10 * 4];
        let source = JsSourceImage::new(10, 10, "src.png".to_string(), pixels);
        let region = serde_wasm_bindgen::to_value(&squarebox_core::CropRegion::new(2, 2, 4, 4))
            .unwrap();

        let asset = crop_background_asset(&source, region).unwrap();
        assert_eq!(asset.width(), 4);
        assert_eq!(asset.height(), 4);
    }

    #[wasm_bindgen_test]
    fn test_crop_background_asset_rejects_non_square() {
        let source = JsSourceImage::new(10, 10, "src.png".to_string(), vec![0u8; 10 * 10 * 4]);
        let region = serde_wasm_bindgen::to_value(&squarebox_core::CropRegion::new(0, 0, 4, 6))
            .unwrap();
        assert!(crop_background_asset(&source, region).is_err());
    }
}
