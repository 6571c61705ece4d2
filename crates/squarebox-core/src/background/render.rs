//! Background rendering onto a square canvas.

use super::{BackgroundError, BackgroundSpec, Color, GradientDirection};
use crate::canvas::SquareCanvas;
use crate::decode::SourceImage;

/// Fill a canvas with the given background spec.
///
/// Solid backgrounds are a flat fill. Gradients interpolate between the two
/// colors along the direction axis. Image backgrounds stretch the stored
/// square asset to the full canvas; the asset was forced square at crop time,
/// so this is an isotropic scale.
///
/// # Errors
///
/// Returns `BackgroundError::MissingAsset` for an image background whose
/// asset is empty or malformed.
pub fn render(canvas: &mut SquareCanvas, spec: &BackgroundSpec) -> Result<(), BackgroundError> {
    match spec {
        BackgroundSpec::Solid { color } => {
            canvas.fill(color.to_rgba());
            Ok(())
        }
        BackgroundSpec::Gradient {
            start,
            end,
            direction,
        } => {
            fill_gradient(canvas, *start, *end, *direction);
            Ok(())
        }
        BackgroundSpec::Image { asset } => fill_image(canvas, asset),
    }
}

/// Paint a linear gradient across the canvas.
///
/// Each pixel center is projected onto the direction axis; the projection
/// parameter t (0 at the start edge, 1 at the opposite edge) selects the
/// interpolated color.
fn fill_gradient(
    canvas: &mut SquareCanvas,
    start: Color,
    end: Color,
    direction: GradientDirection,
) {
    let ((sx, sy), (ex, ey)) = direction.axis_endpoints(canvas.size);
    let dx = ex - sx;
    let dy = ey - sy;
    let len_sq = dx * dx + dy * dy;

    let from = start.to_rgba();
    let to = end.to_rgba();
    let size = canvas.size as usize;

    for y in 0..size {
        let py = y as f32 + 0.5;
        for x in 0..size {
            let px = x as f32 + 0.5;
            let t = (((px - sx) * dx + (py - sy) * dy) / len_sq).clamp(0.0, 1.0);

            let idx = (y * size + x) * 4;
            for c in 0..4 {
                let v = from[c] as f32 + (to[c] as f32 - from[c] as f32) * t;
                canvas.pixels[idx + c] = (v + 0.5) as u8;
            }
        }
    }
}

/// Stretch a square asset over the whole canvas.
fn fill_image(canvas: &mut SquareCanvas, asset: &SourceImage) -> Result<(), BackgroundError> {
    if asset.is_empty() {
        return Err(BackgroundError::MissingAsset);
    }

    if asset.width == canvas.size && asset.height == canvas.size {
        canvas.pixels.copy_from_slice(&asset.pixels);
        return Ok(());
    }

    let rgba = asset.to_rgba_image().ok_or(BackgroundError::MissingAsset)?;
    let scaled = image::imageops::resize(
        &rgba,
        canvas.size,
        canvas.size,
        image::imageops::FilterType::Triangle,
    );
    canvas.pixels.copy_from_slice(scaled.as_raw());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fills_everything() {
        let mut canvas = SquareCanvas::new(8);
        let spec = BackgroundSpec::solid(Color::rgb(12, 34, 56));
        render(&mut canvas, &spec).unwrap();

        assert_eq!(canvas.pixel_at(0, 0), [12, 34, 56, 255]);
        assert_eq!(canvas.pixel_at(7, 7), [12, 34, 56, 255]);
        assert_eq!(canvas.pixel_at(3, 5), [12, 34, 56, 255]);
    }

    #[test]
    fn test_gradient_right_runs_left_to_right() {
        let mut canvas = SquareCanvas::new(256);
        let spec = BackgroundSpec::gradient(
            Color::rgb(0, 0, 0),
            Color::WHITE,
            GradientDirection::Right,
        );
        render(&mut canvas, &spec).unwrap();

        let left = canvas.pixel_at(0, 128)[0];
        let mid = canvas.pixel_at(128, 128)[0];
        let right = canvas.pixel_at(255, 128)[0];
        assert!(left <= 1, "left edge should be near start color, got {}", left);
        assert!((mid as i32 - 128).abs() <= 1, "midpoint should be mid-gray, got {}", mid);
        assert!(right >= 254, "right edge should be near end color, got {}", right);

        // Constant along the perpendicular axis
        assert_eq!(canvas.pixel_at(100, 0), canvas.pixel_at(100, 255));
    }

    #[test]
    fn test_gradient_top_is_right_reversed() {
        let mut canvas = SquareCanvas::new(64);
        let spec = BackgroundSpec::gradient(
            Color::rgb(200, 0, 0),
            Color::rgb(0, 0, 200),
            GradientDirection::Top,
        );
        render(&mut canvas, &spec).unwrap();

        // Start color at the bottom edge, end color at the top edge
        let bottom = canvas.pixel_at(32, 63);
        let top = canvas.pixel_at(32, 0);
        assert!(bottom[0] > bottom[2], "bottom should be mostly red");
        assert!(top[2] > top[0], "top should be mostly blue");
    }

    #[test]
    fn test_gradient_diagonal_corners() {
        let mut canvas = SquareCanvas::new(100);
        let spec = BackgroundSpec::gradient(
            Color::rgb(0, 0, 0),
            Color::WHITE,
            GradientDirection::BottomRight,
        );
        render(&mut canvas, &spec).unwrap();

        assert!(canvas.pixel_at(0, 0)[0] < 10);
        assert!(canvas.pixel_at(99, 99)[0] > 245);
        // The anti-diagonal is the midline
        let mid = canvas.pixel_at(99, 0)[0];
        assert!((mid as i32 - 128).abs() <= 4, "anti-diagonal corner was {}", mid);
    }

    #[test]
    fn test_gradient_is_opaque_for_opaque_stops() {
        let mut canvas = SquareCanvas::new(16);
        let spec = BackgroundSpec::gradient(
            Color::rgb(1, 2, 3),
            Color::rgb(250, 251, 252),
            GradientDirection::BottomLeft,
        );
        render(&mut canvas, &spec).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.pixel_at(x, y)[3], 255);
            }
        }
    }

    #[test]
    fn test_image_background_same_size_copies() {
        let asset = SourceImage::new("bg", 4, 4, (0..4 * 4 * 4).map(|i| i as u8).collect());
        let mut canvas = SquareCanvas::new(4);
        render(&mut canvas, &BackgroundSpec::image(asset.clone())).unwrap();
        assert_eq!(canvas.pixels, asset.pixels);
    }

    #[test]
    fn test_image_background_stretches_to_canvas() {
        // 2x2 uniform asset scaled up stays uniform
        let asset = SourceImage::new("bg", 2, 2, vec![90u8; 2 * 2 * 4]);
        let mut canvas = SquareCanvas::new(10);
        render(&mut canvas, &BackgroundSpec::image(asset)).unwrap();

        assert_eq!(canvas.pixel_at(0, 0), [90, 90, 90, 90]);
        assert_eq!(canvas.pixel_at(9, 9), [90, 90, 90, 90]);
        assert_eq!(canvas.pixel_at(5, 4), [90, 90, 90, 90]);
    }

    #[test]
    fn test_image_background_missing_asset() {
        let empty = SourceImage::new("none", 0, 0, vec![]);
        let mut canvas = SquareCanvas::new(8);
        let result = render(&mut canvas, &BackgroundSpec::image(empty));
        assert_eq!(result, Err(BackgroundError::MissingAsset));
    }
}
