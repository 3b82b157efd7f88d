//! Source image decoding for the re-encoding pipeline.
//!
//! This module provides functionality for:
//! - Resolving the source format from the declared MIME type and the bytes
//! - Decoding JPEG, PNG and WebP sources into an RGBA raster
//! - Applying EXIF orientation so the raster is upright before resizing
//!
//! # Examples
//!
//! ```ignore
//! use snapfit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let (image, format) = decode_image(&bytes, "image/jpeg").unwrap();
//! println!("Decoded {}x{} {}", image.width, image.height, format);
//! ```

mod source;
mod types;

pub use source::decode_image;
pub use types::{DecodeError, SourceImage};

pub(crate) use types::Orientation;
