//! Snapfit Core - image re-encoding library
//!
//! This crate takes an arbitrary source image and produces a resized,
//! re-encoded raster that meets either a fixed quality level or a byte-size
//! budget, searching quality iteratively when the budget is size-based.
//!
//! The host application acquires the image, supplies configuration and
//! persists the result; this crate only does the pixel work.

pub mod config;
pub mod decode;
pub mod encode;
pub mod format;
pub mod payload;
pub mod pipeline;
pub mod plan;
pub mod update;

#[cfg(test)]
mod test_helpers;

pub use config::{CompressionMode, EncodeRequest, ModeKind, PipelineConfig};
pub use decode::{decode_image, DecodeError, SourceImage};
pub use encode::{search_to_target, EncodeError, QualityEncoder, RasterEncoder, SearchOutcome};
pub use format::ImageFormat;
pub use payload::{data_url_size_kb, EncodedResult, PayloadError};
pub use pipeline::{run, run_with_encoder, PipelineError};
pub use plan::plan_dimensions;
pub use update::ImageUpdate;
