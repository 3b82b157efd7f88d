//! Quality-parameterised raster encoding.
//!
//! [`QualityEncoder`] is the seam between the pipeline and the codec. The
//! production implementation, [`RasterEncoder`], resamples with the `image`
//! crate, encodes JPEG and PNG with its codecs and lossy WebP through
//! libwebp.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use super::resample::{resample, FilterType};
use crate::decode::SourceImage;
use crate::format::ImageFormat;

/// Errors that can occur while encoding the output image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested output MIME type has no encoder.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the source dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The codec rejected the image
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },
}

/// Encodes a raster at a given size and quality.
///
/// Implementations must be deterministic for fixed inputs. Output size
/// should tend to shrink as `quality` drops, but callers may not rely on
/// strict monotonicity.
pub trait QualityEncoder {
    /// Resample `image` to `width x height` and encode it as `format`.
    ///
    /// `quality` is in `[0, 1]`; lossless formats ignore it.
    fn encode(
        &self,
        image: &SourceImage,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: f64,
    ) -> Result<Vec<u8>, EncodeError>;
}

impl<E: QualityEncoder + ?Sized> QualityEncoder for &E {
    fn encode(
        &self,
        image: &SourceImage,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: f64,
    ) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(image, width, height, format, quality)
    }
}

/// [`QualityEncoder`] backed by the `image` crate codecs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterEncoder {
    /// Interpolation used when the output size differs from the source.
    pub filter: FilterType,
}

impl RasterEncoder {
    /// Create an encoder using the given resampling filter.
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl QualityEncoder for RasterEncoder {
    fn encode(
        &self,
        image: &SourceImage,
        width: u32,
        height: u32,
        format: ImageFormat,
        quality: f64,
    ) -> Result<Vec<u8>, EncodeError> {
        let pixels = resample(image, width, height, self.filter)?;
        let mut buffer = Cursor::new(Vec::new());
        let failed = |e: image::ImageError| EncodeError::EncodingFailed {
            format,
            message: e.to_string(),
        };

        match format {
            ImageFormat::Jpeg => {
                let rgb = flatten_alpha(&pixels);
                JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality))
                    .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                    .map_err(failed)?;
            }
            ImageFormat::Png => {
                PngEncoder::new(&mut buffer)
                    .write_image(&pixels, width, height, ExtendedColorType::Rgba8)
                    .map_err(failed)?;
            }
            ImageFormat::WebP => {
                let encoded = webp::Encoder::from_rgba(&pixels, width, height)
                    .encode_simple(false, webp_quality(quality))
                    .map_err(|e| EncodeError::EncodingFailed {
                        format,
                        message: format!("{e:?}"),
                    })?;
                return Ok(encoded.to_vec());
            }
        }

        Ok(buffer.into_inner())
    }
}

/// Map a `[0, 1]` quality onto the JPEG codec's 1-100 scale.
pub fn jpeg_quality(quality: f64) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Map a `[0, 1]` quality onto libwebp's 0-100 float scale.
pub fn webp_quality(quality: f64) -> f32 {
    if quality.is_nan() {
        return 0.0;
    }
    (quality * 100.0).clamp(0.0, 100.0) as f32
}

/// Composite RGBA over black and drop the alpha channel.
///
/// Matches what a browser canvas produces when exporting a transparent
/// image as JPEG.
fn flatten_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|px| {
            let alpha = u16::from(px[3]);
            let over = |c: u8| ((u16::from(c) * alpha + 127) / 255) as u8;
            [over(px[0]), over(px[1]), over(px[2])]
        })
        .collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
