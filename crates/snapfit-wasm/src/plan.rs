//! Dimension and size helper bindings.
//!
//! Lets the UI preview the output size and measure stored payloads without
//! running the pipeline.

use snapfit_core::payload::data_url_size_kb;
use wasm_bindgen::prelude::*;

/// Compute output dimensions for a source under optional bounds.
///
/// # Arguments
///
/// * `width`, `height` - Source dimensions in pixels
/// * `max_width`, `max_height` - Bounds in pixels, 0 for unconstrained
///
/// # Returns
///
/// `[width, height]` of the planned output.
///
/// # Example
///
/// ```typescript
/// const [w, h] = plan_dimensions(4032, 3024, 1280, 0); // [1280, 960]
/// ```
#[wasm_bindgen]
pub fn plan_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> Vec<u32> {
    if width == 0 || height == 0 {
        return vec![width, height];
    }
    let (w, h) = snapfit_core::plan_dimensions(width, height, max_width, max_height);
    vec![w, h]
}

/// Size in kilobytes of a base64 payload or `data:` URL.
#[wasm_bindgen]
pub fn estimate_size_kb(text: &str) -> f64 {
    data_url_size_kb(text)
}
