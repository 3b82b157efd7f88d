//! Snapfit WASM - WebAssembly bindings for Snapfit
//!
//! This crate exposes the snapfit-core re-encoding pipeline to the
//! JavaScript host that owns image acquisition and persistence.
//!
//! # Module Structure
//!
//! - `process` - Pipeline bindings (decode, resize, re-encode)
//! - `plan` - Dimension planning and payload size helpers
//! - `types` - WASM-compatible wrapper types for results and updates
//!
//! # Usage
//!
//! ```typescript
//! import init, { process_image, JsImageUpdate } from '@snapfit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const update = process_image(bytes, file.type, { maxWidth: 1024, quality: 80 });
//! console.log(`Encoded ${update.result().size_kb.toFixed(1)} KB`);
//!
//! // User pressed "remove"
//! const cleared = JsImageUpdate.cleared();
//! ```

use wasm_bindgen::prelude::*;

mod plan;
mod process;
mod types;

// Re-export public types
pub use plan::{estimate_size_kb, plan_dimensions};
pub use process::process_image;
pub use types::{JsEncodedResult, JsImageUpdate};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Report an error to the browser console and wrap it for JavaScript.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
