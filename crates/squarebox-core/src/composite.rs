//! The compositor: one source image in, one square PNG out.
//!
//! Orchestrates the whole pipeline: resolve the square geometry, fill the
//! canvas with the background, draw the subject centered on top, encode as
//! PNG. The subject is never scaled or cropped, only the background is; that
//! is the defining guarantee of the tool.

use thiserror::Error;

use crate::background::{self, BackgroundError, BackgroundSpec};
use crate::canvas::SquareCanvas;
use crate::decode::SourceImage;
use crate::encode::{self, EncodeError};
use crate::geometry::{self, GeometryError};

/// Errors from compositing a single image.
#[derive(Debug, Error)]
pub enum CompositeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Background(#[from] BackgroundError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A finished square export: PNG bytes plus the filename to save them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositedImage {
    /// Output filename derived from the source name.
    pub file_name: String,
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
}

/// Composite a source image onto its square background canvas.
///
/// Returns the filled canvas with the subject drawn on it, without encoding.
/// Useful for previews and pixel-level assertions; [`composite`] wraps this
/// with PNG encoding.
///
/// # Errors
///
/// `GeometryError::InvalidDimensions` for a zero-sized source,
/// `BackgroundError::MissingAsset` for an image background with no asset.
pub fn composite_canvas(
    source: &SourceImage,
    spec: &BackgroundSpec,
) -> Result<SquareCanvas, CompositeError> {
    let geo = geometry::resolve(source.width, source.height)?;

    let mut canvas = SquareCanvas::new(geo.size);
    background::render(&mut canvas, spec)?;
    // Subject strictly after background, so the background never overpaints it
    canvas.blit(source, geo.offset_x, geo.offset_y);

    Ok(canvas)
}

/// Composite a source image and encode the result as PNG.
///
/// # Arguments
///
/// * `source` - The subject image; drawn centered and unscaled
/// * `spec` - Immutable background snapshot for this call
///
/// # Returns
///
/// A `CompositedImage` holding the PNG bytes and the derived output filename
/// (`photo.jpg` -> `photo_squared.jpg`).
pub fn composite(
    source: &SourceImage,
    spec: &BackgroundSpec,
) -> Result<CompositedImage, CompositeError> {
    let canvas = composite_canvas(source, spec)?;
    let png = encode::encode_png(&canvas.pixels, canvas.size, canvas.size)?;

    Ok(CompositedImage {
        file_name: output_file_name(&source.name),
        png,
    })
}

/// Composite every image in the working set against one shared background.
///
/// Outcomes are per-image and order-preserving: a failure for one image never
/// aborts the rest of the batch.
pub fn composite_all(
    sources: &[SourceImage],
    spec: &BackgroundSpec,
) -> Vec<Result<CompositedImage, CompositeError>> {
    sources.iter().map(|src| composite(src, spec)).collect()
}

/// Derive the output filename: `_squared` before the extension, or appended
/// when there is none. A leading dot does not count as an extension.
pub fn output_file_name(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => format!("{}_squared{}", &name[..idx], &name[idx..]),
        _ => format!("{}_squared", name),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
