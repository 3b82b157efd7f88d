//! Encoded output and its base64 / data-URL transport form.
//!
//! Sizes are measured the way the host stores results: as base64 text.
//! Every 4 base64 characters carry 3 bytes, so a payload of `L` characters
//! is `(L * 3/4) / 1024` kilobytes. Any `data:<mime>;base64,` prefix is
//! stripped before measuring.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::format::ImageFormat;

/// Errors from parsing a transported payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The text is not a `data:<mime>;base64,<payload>` URL.
    #[error("Not a base64 data URL")]
    NotDataUrl,

    /// The data URL names a MIME type the pipeline cannot represent.
    #[error("Unsupported data URL MIME type: {0}")]
    UnsupportedMime(String),

    /// The payload is not valid standard base64.
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Encoded image bytes plus the format that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
    /// Format the bytes are encoded in.
    pub format: ImageFormat,
}

impl EncodedResult {
    pub fn new(bytes: Vec<u8>, format: ImageFormat) -> Self {
        Self { bytes, format }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Size in kilobytes as measured on the base64 transport form.
    pub fn size_kb(&self) -> f64 {
        encoded_size_kb(self.bytes.len())
    }

    /// Standard (padded) base64 text of the bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:<mime>;base64,<payload>` form of the result.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(text: &str) -> Result<Self, PayloadError> {
        let (meta, payload) = text
            .trim()
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or(PayloadError::NotDataUrl)?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or(PayloadError::NotDataUrl)?;
        let format = ImageFormat::from_mime(mime)
            .ok_or_else(|| PayloadError::UnsupportedMime(mime.to_string()))?;

        Ok(Self::new(STANDARD.decode(payload)?, format))
    }
}

/// Kilobytes represented by `len` characters of base64 text.
pub fn base64_size_kb(len: usize) -> f64 {
    (len as f64 * 3.0 / 4.0) / 1024.0
}

/// Kilobytes of `byte_len` raw bytes once carried as padded base64 text.
pub fn encoded_size_kb(byte_len: usize) -> f64 {
    let chars = base64::encoded_len(byte_len, true).unwrap_or(usize::MAX);
    base64_size_kb(chars)
}

/// Drop a leading `data:...;base64,` prefix, if present.
pub fn strip_data_url_prefix(text: &str) -> &str {
    text.strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .filter(|(meta, _)| meta.ends_with(";base64"))
        .map_or(text, |(_, payload)| payload)
}

/// Kilobytes of a base64 payload, with or without a data-URL prefix.
pub fn data_url_size_kb(text: &str) -> f64 {
    base64_size_kb(strip_data_url_prefix(text).len())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
