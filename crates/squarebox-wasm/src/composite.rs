//! Compositing WASM bindings.
//!
//! One call per image: square canvas geometry, background fill, centered
//! subject draw, PNG encode. The returned bytes go straight into a
//! `Blob([bytes], { type: 'image/png' })` for download.
//!
//! # Example
//!
//! ```typescript
//! import { composite_image, output_name, JsBackgroundSpec } from '@squarebox/wasm';
//!
//! const spec = JsBackgroundSpec.solid('#ffffff');
//! const png = composite_image(image, spec);
//! const blob = new Blob([png], { type: 'image/png' });
//! saveAs(blob, output_name(image.name)); // photo.jpg -> photo_squared.jpg
//! ```

use crate::background::JsBackgroundSpec;
use crate::types::JsSourceImage;
use squarebox_core::composite;
use wasm_bindgen::prelude::*;

/// The result of compositing one image in a batch.
///
/// Either `png_bytes` is set (success) or `error` is (failure); batches never
/// abort as a whole, so the UI can render a per-image outcome.
#[wasm_bindgen]
pub struct JsCompositeOutcome {
    name: String,
    file_name: Option<String>,
    png: Option<Vec<u8>>,
    error: Option<String>,
}

#[wasm_bindgen]
impl JsCompositeOutcome {
    /// The source image's display name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Whether compositing this image succeeded.
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.png.is_some()
    }

    /// The derived output filename, when successful.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> Option<String> {
        self.file_name.clone()
    }

    /// The PNG bytes, when successful.
    pub fn png_bytes(&self) -> Option<Vec<u8>> {
        self.png.clone()
    }

    /// The failure message, when compositing failed.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

impl JsCompositeOutcome {
    pub(crate) fn from_result(
        name: String,
        result: Result<composite::CompositedImage, composite::CompositeError>,
    ) -> Self {
        match result {
            Ok(out) => Self {
                name,
                file_name: Some(out.file_name),
                png: Some(out.png),
                error: None,
            },
            Err(e) => Self {
                name,
                file_name: None,
                png: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Composite one source image against a background spec, returning PNG bytes.
///
/// The subject is drawn centered and unscaled on a `max(W, H)` square canvas;
/// only the background is synthesized around it.
///
/// # Errors
///
/// Returns an error for a zero-sized source or an image background with no
/// asset loaded.
#[wasm_bindgen]
pub fn composite_image(
    source: &JsSourceImage,
    spec: &JsBackgroundSpec,
) -> Result<Vec<u8>, JsValue> {
    composite::composite(source.as_source(), spec.as_spec())
        .map(|out| out.png)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Derive the output filename for a source name
/// (`photo.jpg` -> `photo_squared.jpg`).
#[wasm_bindgen]
pub fn output_name(name: &str) -> String {
    composite::output_file_name(name)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_composite_image_produces_png() {
        let source = JsSourceImage::new(4, 2, "a.png".to_string(), vec![50u8; 4 * 2 * 4]);
        let spec = JsBackgroundSpec::solid("#ffffff").unwrap();

        let png = composite_image(&source, &spec).unwrap();
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[wasm_bindgen_test]
    fn test_composite_image_rejects_missing_asset() {
        let source = JsSourceImage::new(4, 2, "a.png".to_string(), vec![50u8; 4 * 2 * 4]);
        let empty = JsSourceImage::new(0, 0, "none".to_string(), vec![]);
        let spec = JsBackgroundSpec::image(&empty);

        assert!(composite_image(&source, &spec).is_err());
    }
}
