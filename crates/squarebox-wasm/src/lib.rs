//! SquareBox WASM - WebAssembly bindings for SquareBox
//!
//! This crate exposes the squarebox-core compositing engine to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image loading bindings (PNG/JPEG/GIF with EXIF orientation)
//! - `background` - Background spec construction and crop-to-asset bindings
//! - `composite` - Per-image compositing and output naming
//! - `session` - Stateful working set + active background for the UI
//!
//! # Usage
//!
//! ```typescript
//! import init, { SquareSession, load_image } from '@squarebox/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new SquareSession();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! session.add_image(load_image(bytes, file.name));
//! const outcomes = session.composite_all();
//! ```

use wasm_bindgen::prelude::*;

mod background;
mod composite;
mod decode;
mod session;
mod types;

// Re-export public types
pub use background::{crop_background_asset, snap_gradient_angle, JsBackgroundSpec};
pub use composite::{composite_image, output_name, JsCompositeOutcome};
pub use decode::load_image;
pub use session::SquareSession;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
