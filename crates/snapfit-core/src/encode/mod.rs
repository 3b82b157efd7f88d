//! Output encoding for the re-encoding pipeline.
//!
//! This module provides functionality for:
//! - Resampling a source raster to the planned size
//! - Encoding at a fixed quality through the [`QualityEncoder`] seam
//! - Searching quality toward a byte-size budget
//!
//! # Examples
//!
//! ```ignore
//! use snapfit_core::encode::{search_to_target, QualityEncoder, RasterEncoder};
//! use snapfit_core::ImageFormat;
//!
//! let encoder = RasterEncoder::default();
//! let jpeg = encoder.encode(&image, 800, 600, ImageFormat::Jpeg, 0.8).unwrap();
//! let fitted = search_to_target(&encoder, &image, 800, 600, ImageFormat::Jpeg, 100.0).unwrap();
//! println!("{} bytes after {} attempts", fitted.bytes.len(), fitted.attempts);
//! ```

mod raster;
mod resample;
mod search;

pub use raster::{jpeg_quality, webp_quality, EncodeError, QualityEncoder, RasterEncoder};
pub use resample::{resample, FilterType};
pub use search::{
    search_to_target, SearchOutcome, DAMPING, INITIAL_QUALITY, MAX_ITERATIONS, MIN_QUALITY,
};
