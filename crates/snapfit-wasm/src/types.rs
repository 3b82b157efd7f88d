//! WASM-compatible wrapper types for pipeline output.
//!
//! This module provides JavaScript-friendly types that wrap the core snapfit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use snapfit_core::{EncodedResult, ImageUpdate};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// An encoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The bytes live in WASM memory. `bytes()` and `to_data_url()` copy them
/// into JavaScript memory on each call.
#[wasm_bindgen]
pub struct JsEncodedResult {
    inner: EncodedResult,
}

#[wasm_bindgen]
impl JsEncodedResult {
    /// Encoded file bytes as a Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// MIME type of the encoded bytes
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Number of encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    /// Size in kilobytes, measured on the base64 transport form
    #[wasm_bindgen(getter)]
    pub fn size_kb(&self) -> f64 {
        self.inner.size_kb()
    }

    /// Standard base64 text of the bytes.
    pub fn to_base64(&self) -> String {
        self.inner.to_base64()
    }

    /// `data:<mime>;base64,<payload>` URL, ready to store or display.
    pub fn to_data_url(&self) -> String {
        self.inner.to_data_url()
    }
}

impl JsEncodedResult {
    pub(crate) fn from_core(inner: EncodedResult) -> Self {
        Self { inner }
    }
}

/// What the host should do with its stored image.
///
/// Three states that must stay distinct: `"unchanged"` (leave the stored
/// value alone), `"cleared"` (remove it) and `"set"` (replace it with
/// `result()`).
#[wasm_bindgen]
pub struct JsImageUpdate {
    inner: ImageUpdate,
}

#[wasm_bindgen]
impl JsImageUpdate {
    /// Update that leaves the stored image untouched.
    pub fn unchanged() -> JsImageUpdate {
        Self {
            inner: ImageUpdate::Unchanged,
        }
    }

    /// Update that removes the stored image.
    pub fn cleared() -> JsImageUpdate {
        Self {
            inner: ImageUpdate::Cleared,
        }
    }

    /// Interpret a stored data URL; an empty string is a clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither empty nor a supported
    /// base64 image data URL.
    pub fn from_data_url(text: &str) -> Result<JsImageUpdate, JsValue> {
        ImageUpdate::from_data_url(text)
            .map(Self::from_core)
            .map_err(to_js_error)
    }

    /// `"unchanged"`, `"cleared"` or `"set"`
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.inner.kind().to_string()
    }

    /// The new image, present only in the `"set"` state.
    pub fn result(&self) -> Option<JsEncodedResult> {
        self.inner.result().cloned().map(JsEncodedResult::from_core)
    }
}

impl JsImageUpdate {
    pub(crate) fn from_core(inner: ImageUpdate) -> Self {
        Self { inner }
    }
}
