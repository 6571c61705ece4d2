//! SquareBox Core - Square image compositing library
//!
//! This crate pads raster images to square without cropping or scaling the
//! subject: the image is centered on a `max(W, H)` square canvas and the
//! remaining area is filled with a configurable background (solid color,
//! linear gradient, or a user-cropped image), then exported as PNG.
//!
//! The engine is pure: the active background arrives as an immutable
//! [`BackgroundSpec`] snapshot per call, and batch compositing yields one
//! independent outcome per source image.

pub mod background;
pub mod canvas;
pub mod composite;
pub mod crop;
pub mod decode;
pub mod encode;
pub mod geometry;

pub use background::{BackgroundError, BackgroundMode, BackgroundSpec, Color, GradientDirection};
pub use canvas::SquareCanvas;
pub use composite::{
    composite, composite_all, composite_canvas, output_file_name, CompositeError, CompositedImage,
};
pub use crop::{crop_square, CropError, CropRegion};
pub use decode::{decode_image, DecodeError, SourceImage};
pub use encode::{encode_png, EncodeError};
pub use geometry::{resolve, GeometryError, SquareGeometry};
