//! Background specification and rendering.
//!
//! A background is what fills the square canvas before the subject image is
//! drawn. Three modes are supported:
//!
//! - **Solid**: a single color
//! - **Gradient**: a two-color linear gradient along one of 8 compass
//!   directions
//! - **Image**: a pre-cropped square asset stretched to the canvas
//!
//! Exactly one [`BackgroundSpec`] is active per session in the UI; the engine
//! receives it as an immutable snapshot per composite call and never reads
//! ambient state.

mod render;

pub use render::render;

use crate::decode::SourceImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from background parsing and rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackgroundError {
    /// The background mode tag is not one of solid/gradient/image.
    #[error("Unsupported background mode: {0}")]
    UnsupportedMode(String),

    /// Image mode was selected but no cropped asset has been loaded.
    #[error("Image background has no asset loaded")]
    MissingAsset,

    /// A color value could not be parsed.
    #[error("Invalid color value: {0}")]
    InvalidColor(String),
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque white, the default background of the app.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a CSS-style hex color: `#rrggbb` or `#rrggbbaa`, `#` optional.
    ///
    /// # Errors
    ///
    /// Returns `BackgroundError::InvalidColor` for any other shape.
    pub fn from_hex(hex: &str) -> Result<Self, BackgroundError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || BackgroundError::InvalidColor(hex.to_string());

        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Color::rgb(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            8 => Ok(Color {
                r: parse(&digits[0..2])?,
                g: parse(&digits[2..4])?,
                b: parse(&digits[4..6])?,
                a: parse(&digits[6..8])?,
            }),
            _ => Err(invalid()),
        }
    }

    /// The color as an RGBA byte quadruple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The 8 compass directions a linear gradient can run in.
///
/// Directions name where the gradient *ends*: `Right` runs from the left edge
/// to the right edge. Angles are in screen coordinates (y down), so `Bottom`
/// is 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Top,
    TopRight,
}

/// All directions in snapping priority order (ties go to the earlier entry).
const DIRECTIONS: [GradientDirection; 8] = [
    GradientDirection::Right,
    GradientDirection::BottomRight,
    GradientDirection::Bottom,
    GradientDirection::BottomLeft,
    GradientDirection::Left,
    GradientDirection::TopLeft,
    GradientDirection::Top,
    GradientDirection::TopRight,
];

impl GradientDirection {
    /// The direction's angle in degrees, screen coordinates (y down).
    pub fn angle_degrees(self) -> f32 {
        match self {
            GradientDirection::Right => 0.0,
            GradientDirection::BottomRight => 45.0,
            GradientDirection::Bottom => 90.0,
            GradientDirection::BottomLeft => 135.0,
            GradientDirection::Left => 180.0,
            GradientDirection::TopLeft => 225.0,
            GradientDirection::Top => 270.0,
            GradientDirection::TopRight => 315.0,
        }
    }

    /// Snap an arbitrary angle to the nearest of the 8 directions.
    ///
    /// Distance is the smallest absolute angular difference; exact ties pick
    /// the earlier direction in priority order (right, bottom-right, bottom,
    /// bottom-left, left, top-left, top, top-right).
    pub fn from_degrees(degrees: f32) -> Self {
        let angle = degrees.rem_euclid(360.0);

        let mut best = DIRECTIONS[0];
        let mut best_dist = f32::INFINITY;
        for dir in DIRECTIONS {
            let raw = (angle - dir.angle_degrees()).abs();
            let dist = raw.min(360.0 - raw);
            if dist < best_dist {
                best = dir;
                best_dist = dist;
            }
        }
        best
    }

    /// Parse a kebab-case direction name (`"right"`, `"bottom-left"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        DIRECTIONS.into_iter().find(|d| d.name() == name)
    }

    /// The kebab-case name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            GradientDirection::Right => "right",
            GradientDirection::BottomRight => "bottom-right",
            GradientDirection::Bottom => "bottom",
            GradientDirection::BottomLeft => "bottom-left",
            GradientDirection::Left => "left",
            GradientDirection::TopLeft => "top-left",
            GradientDirection::Top => "top",
            GradientDirection::TopRight => "top-right",
        }
    }

    /// Gradient axis endpoints on a `size x size` canvas: start edge/corner
    /// to the opposite edge/corner.
    pub(crate) fn axis_endpoints(self, size: u32) -> ((f32, f32), (f32, f32)) {
        let s = size as f32;
        match self {
            GradientDirection::Right => ((0.0, 0.0), (s, 0.0)),
            GradientDirection::Left => ((s, 0.0), (0.0, 0.0)),
            GradientDirection::Bottom => ((0.0, 0.0), (0.0, s)),
            GradientDirection::Top => ((0.0, s), (0.0, 0.0)),
            GradientDirection::BottomRight => ((0.0, 0.0), (s, s)),
            GradientDirection::TopLeft => ((s, s), (0.0, 0.0)),
            GradientDirection::BottomLeft => ((s, 0.0), (0.0, s)),
            GradientDirection::TopRight => ((0.0, s), (s, 0.0)),
        }
    }
}

/// Background mode tag, as selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    Solid,
    Gradient,
    Image,
}

impl BackgroundMode {
    /// Parse a mode tag string.
    ///
    /// # Errors
    ///
    /// Returns `BackgroundError::UnsupportedMode` for anything other than
    /// `"solid"`, `"gradient"` or `"image"`.
    pub fn parse(tag: &str) -> Result<Self, BackgroundError> {
        match tag {
            "solid" => Ok(BackgroundMode::Solid),
            "gradient" => Ok(BackgroundMode::Gradient),
            "image" => Ok(BackgroundMode::Image),
            other => Err(BackgroundError::UnsupportedMode(other.to_string())),
        }
    }

    /// The mode's tag string.
    pub fn name(self) -> &'static str {
        match self {
            BackgroundMode::Solid => "solid",
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Image => "image",
        }
    }
}

/// The active description of what fills a square canvas behind a subject.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundSpec {
    /// A single color.
    Solid { color: Color },
    /// A linear gradient from `start` to `end` along `direction`.
    Gradient {
        start: Color,
        end: Color,
        direction: GradientDirection,
    },
    /// A pre-cropped square asset, stretched to the canvas.
    Image { asset: SourceImage },
}

impl BackgroundSpec {
    /// Solid-color background.
    pub fn solid(color: Color) -> Self {
        BackgroundSpec::Solid { color }
    }

    /// Two-color linear gradient background.
    pub fn gradient(start: Color, end: Color, direction: GradientDirection) -> Self {
        BackgroundSpec::Gradient {
            start,
            end,
            direction,
        }
    }

    /// Image background from a cropped square asset.
    pub fn image(asset: SourceImage) -> Self {
        BackgroundSpec::Image { asset }
    }

    /// The mode tag of this spec.
    pub fn mode(&self) -> BackgroundMode {
        match self {
            BackgroundSpec::Solid { .. } => BackgroundMode::Solid,
            BackgroundSpec::Gradient { .. } => BackgroundMode::Gradient,
            BackgroundSpec::Image { .. } => BackgroundMode::Image,
        }
    }
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        BackgroundSpec::solid(Color::WHITE)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Snapping never lands more than 22.5 degrees away.
        #[test]
        fn prop_snap_within_half_sector(degrees in -720.0f32..=720.0) {
            let dir = GradientDirection::from_degrees(degrees);
            let angle = degrees.rem_euclid(360.0);
            let raw = (angle - dir.angle_degrees()).abs();
            let dist = raw.min(360.0 - raw);
            prop_assert!(dist <= 22.5 + 1e-3, "snapped {} degrees away", dist);
        }

        /// Property: Snapping an exact direction angle is the identity.
        #[test]
        fn prop_snap_exact_is_identity(idx in 0usize..8) {
            let dir = DIRECTIONS[idx];
            prop_assert_eq!(GradientDirection::from_degrees(dir.angle_degrees()), dir);
        }

        /// Property: Hex round-trip through formatting.
        #[test]
        fn prop_hex_round_trip(r: u8, g: u8, b: u8) {
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            prop_assert_eq!(Color::from_hex(&hex).unwrap(), Color::rgb(r, g, b));
        }
    }
}
