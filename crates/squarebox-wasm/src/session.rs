//! The browser session: working set + active background.
//!
//! `SquareSession` is the stateful boundary between the UI and the pure
//! engine. It owns the list of uploaded images and the user's current
//! background choice (mode, colors, gradient direction, cropped asset). Every
//! compositing call takes an immutable snapshot of that state and hands it to
//! the core, so mid-batch UI edits never bleed into in-flight work.
//!
//! # Example
//!
//! ```typescript
//! import { SquareSession, load_image } from '@squarebox/wasm';
//!
//! const session = new SquareSession();
//! session.add_image(load_image(bytesA, 'a.jpg'));
//! session.add_image(load_image(bytesB, 'b.png'));
//! session.set_mode('gradient');
//! session.set_gradient('#ffffff', '#cdb4db', 'bottom-right');
//!
//! for (const outcome of session.composite_all()) {
//!   if (outcome.ok) {
//!     saveAs(new Blob([outcome.png_bytes()]), outcome.file_name);
//!   } else {
//!     showError(outcome.name, outcome.error);
//!   }
//! }
//! ```

use crate::composite::JsCompositeOutcome;
use crate::types::JsSourceImage;
use squarebox_core::{
    composite, crop_square, BackgroundError, BackgroundMode, BackgroundSpec, Color, CropRegion,
    GradientDirection, SourceImage,
};
use wasm_bindgen::prelude::*;

/// A SquareBox editing session.
#[wasm_bindgen]
pub struct SquareSession {
    images: Vec<SourceImage>,
    mode: BackgroundMode,
    solid: Color,
    gradient_start: Color,
    gradient_end: Color,
    gradient_direction: GradientDirection,
    background_asset: Option<SourceImage>,
}

impl Default for SquareSession {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            mode: BackgroundMode::Solid,
            // The app's defaults: white fill, white-to-dusty-purple gradient
            solid: Color::WHITE,
            gradient_start: Color::WHITE,
            gradient_end: Color::rgb(0xcd, 0xb4, 0xdb),
            gradient_direction: GradientDirection::Bottom,
            background_asset: None,
        }
    }
}

#[wasm_bindgen]
impl SquareSession {
    /// Create a session with an empty working set and a white solid
    /// background.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SquareSession {
        Self::default()
    }

    /// Add a loaded image to the working set.
    pub fn add_image(&mut self, image: JsSourceImage) {
        self.images.push(image.into_source());
    }

    /// Decode raw file bytes and add the result to the working set.
    pub fn add_image_bytes(&mut self, bytes: &[u8], name: &str) -> Result<(), JsValue> {
        let image = squarebox_core::decode_image(bytes, name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.images.push(image);
        Ok(())
    }

    /// Remove the image at `index`. Returns false if the index is out of
    /// range.
    pub fn remove_image(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.images.remove(index);
            true
        } else {
            false
        }
    }

    /// Empty the working set.
    pub fn clear_images(&mut self) {
        self.images.clear();
    }

    /// Number of images in the working set.
    #[wasm_bindgen(getter)]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Display name of the image at `index`.
    pub fn image_name(&self, index: usize) -> Option<String> {
        self.images.get(index).map(|img| img.name.clone())
    }

    /// Switch the background mode: `"solid"`, `"gradient"` or `"image"`.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.set_mode_tag(mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the solid background color from a CSS hex string.
    pub fn set_solid_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.solid = Color::from_hex(color).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Set the gradient stops and named direction.
    pub fn set_gradient(
        &mut self,
        start: &str,
        end: &str,
        direction: &str,
    ) -> Result<(), JsValue> {
        let start = Color::from_hex(start).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let end = Color::from_hex(end).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let direction = GradientDirection::from_name(direction).ok_or_else(|| {
            JsValue::from_str(&format!("Unknown gradient direction: {}", direction))
        })?;

        self.gradient_start = start;
        self.gradient_end = end;
        self.gradient_direction = direction;
        Ok(())
    }

    /// Point the gradient at a raw drag angle; it is snapped to the nearest
    /// of the 8 compass directions.
    pub fn set_gradient_angle(&mut self, degrees: f32) {
        self.gradient_direction = GradientDirection::from_degrees(degrees);
    }

    /// Install a pre-cropped square asset for image backgrounds.
    pub fn set_background_asset(&mut self, asset: JsSourceImage) {
        self.background_asset = Some(asset.into_source());
    }

    /// Crop a square region out of `source` and install it as the background
    /// asset. `region` is a `{ x, y, width, height }` object.
    pub fn set_background_asset_from_crop(
        &mut self,
        source: &JsSourceImage,
        region: JsValue,
    ) -> Result<(), JsValue> {
        let region: CropRegion = serde_wasm_bindgen::from_value(region)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop region: {}", e)))?;

        let asset = crop_square(source.as_source(), region)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.background_asset = Some(asset);
        Ok(())
    }

    /// Drop the cached background asset.
    pub fn clear_background_asset(&mut self) {
        self.background_asset = None;
    }

    /// Composite the image at `index` against the active background,
    /// returning PNG bytes.
    pub fn composite_at(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        let image = self
            .images
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("No image at index {}", index)))?;
        let spec = self
            .active_spec()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        composite::composite(image, &spec)
            .map(|out| out.png)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The output filename for the image at `index`.
    pub fn output_name_at(&self, index: usize) -> Option<String> {
        self.images
            .get(index)
            .map(|img| composite::output_file_name(&img.name))
    }

    /// Composite every image in the working set against one snapshot of the
    /// active background.
    ///
    /// Returns one outcome per image, in input order; a failure for one image
    /// never aborts the rest. If the background itself is unusable (image
    /// mode with no cropped asset), every outcome carries that error.
    pub fn composite_all(&self) -> Vec<JsCompositeOutcome> {
        let spec = match self.active_spec() {
            Ok(spec) => spec,
            Err(e) => {
                return self
                    .images
                    .iter()
                    .map(|img| {
                        JsCompositeOutcome::from_result(img.name.clone(), Err(e.clone().into()))
                    })
                    .collect();
            }
        };

        let results = composite::composite_all(&self.images, &spec);
        self.images
            .iter()
            .zip(results)
            .map(|(img, result)| {
                if let Err(e) = &result {
                    warn(&format!("compositing {} failed: {}", img.name, e));
                }
                JsCompositeOutcome::from_result(img.name.clone(), result)
            })
            .collect()
    }
}

impl SquareSession {
    /// Parse and apply a mode tag.
    fn set_mode_tag(&mut self, mode: &str) -> Result<(), BackgroundError> {
        self.mode = BackgroundMode::parse(mode)?;
        Ok(())
    }

    /// Snapshot the current UI state as an immutable background spec.
    fn active_spec(&self) -> Result<BackgroundSpec, BackgroundError> {
        match self.mode {
            BackgroundMode::Solid => Ok(BackgroundSpec::solid(self.solid)),
            BackgroundMode::Gradient => Ok(BackgroundSpec::gradient(
                self.gradient_start,
                self.gradient_end,
                self.gradient_direction,
            )),
            BackgroundMode::Image => self
                .background_asset
                .clone()
                .map(BackgroundSpec::image)
                .ok_or(BackgroundError::MissingAsset),
        }
    }
}

/// Log a warning to the browser console; a no-op off wasm.
fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
