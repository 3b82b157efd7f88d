//! Collaborator configuration and its resolution into an encode request.
//!
//! [`PipelineConfig`] mirrors the record the host hands over, with every
//! field optional. [`EncodeRequest::resolve`] applies defaults and clamps and
//! produces the fully-specified request for one pipeline run.

use serde::{Deserialize, Serialize};

use crate::encode::{EncodeError, FilterType};
use crate::format::ImageFormat;
use crate::plan::plan_dimensions;

/// Quality (0-100) used when none is configured.
pub const DEFAULT_QUALITY: f64 = 80.0;
/// Size budget in kilobytes used when none is configured.
pub const DEFAULT_TARGET_SIZE_KB: f64 = 100.0;

/// Which compression strategy the host selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModeKind {
    /// Fixed quality, size unconstrained.
    #[default]
    Quality,
    /// Vary quality to meet a size budget.
    TargetSize,
}

/// Configuration record supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Maximum output width; absent or non-positive means unconstrained.
    pub max_width: Option<f64>,
    /// Maximum output height; absent or non-positive means unconstrained.
    pub max_height: Option<f64>,
    /// Compression strategy.
    pub mode: ModeKind,
    /// Quality 0-100 for [`ModeKind::Quality`].
    pub quality: Option<f64>,
    /// Size budget in kilobytes for [`ModeKind::TargetSize`].
    #[serde(rename = "targetSizeKB", alias = "targetSizeKb")]
    pub target_size_kb: Option<f64>,
    /// Output MIME type; defaults to the source format.
    pub output_mime_type: Option<String>,
    /// Resampling filter.
    pub filter: FilterType,
}

/// Resolved compression strategy. Exactly one of the two applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompressionMode {
    /// Encode once at this quality in `[0, 1]`.
    Quality(f64),
    /// Search for the best encoding within this many kilobytes.
    TargetSize(f64),
}

impl PipelineConfig {
    /// Max bounds as whole pixels, 0 meaning unconstrained.
    pub fn max_dimensions(&self) -> (u32, u32) {
        (to_bound(self.max_width), to_bound(self.max_height))
    }

    /// Resolve the compression strategy, filling in defaults.
    ///
    /// Quality is clamped to 0-100 before scaling to `[0, 1]`; a missing or
    /// non-finite quality uses [`DEFAULT_QUALITY`]. A missing, non-positive
    /// or non-finite size budget uses [`DEFAULT_TARGET_SIZE_KB`].
    pub fn compression_mode(&self) -> CompressionMode {
        match self.mode {
            ModeKind::Quality => {
                let quality = self
                    .quality
                    .filter(|q| q.is_finite())
                    .unwrap_or(DEFAULT_QUALITY)
                    .clamp(0.0, 100.0);
                CompressionMode::Quality(quality / 100.0)
            }
            ModeKind::TargetSize => {
                let kb = self
                    .target_size_kb
                    .filter(|kb| kb.is_finite() && *kb > 0.0)
                    .unwrap_or(DEFAULT_TARGET_SIZE_KB);
                CompressionMode::TargetSize(kb)
            }
        }
    }

    /// Output format: the configured MIME type, or the source format.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedFormat` if a configured MIME type has
    /// no encoder.
    pub fn output_format(&self, source: ImageFormat) -> Result<ImageFormat, EncodeError> {
        match self.output_mime_type.as_deref().map(str::trim) {
            None | Some("") => Ok(source),
            Some(mime) => ImageFormat::from_mime(mime)
                .ok_or_else(|| EncodeError::UnsupportedFormat(mime.to_string())),
        }
    }
}

fn to_bound(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v >= 1.0 => v.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Fully-resolved parameters for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeRequest {
    pub target_width: u32,
    pub target_height: u32,
    pub format: ImageFormat,
    pub mode: CompressionMode,
}

impl EncodeRequest {
    /// Build the request for a decoded source of `source_dimensions`.
    pub fn resolve(
        config: &PipelineConfig,
        source_dimensions: (u32, u32),
        source_format: ImageFormat,
    ) -> Result<Self, EncodeError> {
        let (max_width, max_height) = config.max_dimensions();
        let (target_width, target_height) = plan_dimensions(
            source_dimensions.0,
            source_dimensions.1,
            max_width,
            max_height,
        );

        Ok(Self {
            target_width,
            target_height,
            format: config.output_format(source_format)?,
            mode: config.compression_mode(),
        })
    }
}
