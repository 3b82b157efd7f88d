//! Pipeline WASM bindings.
//!
//! This module exposes the snapfit-core pipeline to JavaScript. The host
//! hands over the picked or captured file bytes, its MIME type and the
//! widget configuration, and gets back an update to persist.
//!
//! # Functions
//!
//! - [`process_image`] - Decode, resize and re-encode an image
//!
//! # Example
//!
//! ```typescript
//! import { process_image } from '@snapfit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const update = process_image(bytes, file.type, {
//!   maxWidth: 1280,
//!   mode: 'targetSize',
//!   targetSizeKB: 150,
//! });
//! if (update.kind === 'set') {
//!   save(update.result().to_data_url());
//! }
//! ```

use snapfit_core::{pipeline, ImageUpdate, PipelineConfig};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsImageUpdate;

/// Decode, resize and re-encode an image.
///
/// Runs synchronously; call it from a Web Worker to keep the UI thread free.
///
/// # Arguments
///
/// * `bytes` - Source file bytes as a `Uint8Array`
/// * `mime_type` - Declared MIME type of the source (may be empty)
/// * `config` - `{ maxWidth, maxHeight, mode: "quality" | "targetSize",
///   quality, targetSizeKB, outputMimeType, filter }`, every field optional;
///   `undefined` or `null` uses the defaults
///
/// # Returns
///
/// A `JsImageUpdate` in the `"set"` state.
///
/// # Errors
///
/// Returns an error if:
/// - The config object cannot be read
/// - The bytes are not a JPEG, PNG or WebP image
/// - The output format is unsupported or encoding fails
///
/// Missing a `targetSizeKB` budget is not an error.
#[wasm_bindgen]
pub fn process_image(
    bytes: &[u8],
    mime_type: &str,
    config: JsValue,
) -> Result<JsImageUpdate, JsValue> {
    let config = parse_config(config)?;

    pipeline::run(bytes, mime_type, &config)
        .map(|result| JsImageUpdate::from_core(ImageUpdate::Set(result)))
        .map_err(to_js_error)
}

fn parse_config(config: JsValue) -> Result<PipelineConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PipelineConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| to_js_error(format!("Invalid config: {}", e)))
}
