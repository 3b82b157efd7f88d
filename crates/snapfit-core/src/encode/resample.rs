//! Resampling a source raster to the planned output size.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::EncodeError;
use crate::decode::SourceImage;

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resample `image` to `width x height` RGBA pixels.
///
/// Borrows the source buffer when the dimensions already match, so repeated
/// encodes at the same size do not copy the raster.
///
/// # Errors
///
/// * `EncodeError::InvalidDimensions` if either target axis is zero
/// * `EncodeError::InvalidPixelData` if the source buffer does not match its
///   dimensions
pub fn resample(
    image: &SourceImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Cow<'_, [u8]>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let view = image
        .as_rgba_view()
        .ok_or(EncodeError::InvalidPixelData {
            expected: image.width as usize * image.height as usize * 4,
            actual: image.pixels.len(),
        })?;

    if image.dimensions() == (width, height) {
        return Ok(Cow::Borrowed(image.pixels.as_slice()));
    }

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());
    Ok(Cow::Owned(resized.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::textured_image;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_resample_downscale() {
        let img = textured_image(100, 50);
        let pixels = resample(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(pixels.len(), 50 * 25 * 4);
        assert!(matches!(pixels, Cow::Owned(_)));
    }

    #[test]
    fn test_resample_same_dimensions_borrows() {
        let img = textured_image(100, 50);
        let pixels = resample(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert!(matches!(pixels, Cow::Borrowed(_)));
        assert_eq!(pixels.as_ref(), img.pixels.as_slice());
    }

    #[test]
    fn test_resample_zero_dimensions_error() {
        let img = textured_image(10, 10);

        assert!(matches!(
            resample(&img, 0, 10, FilterType::Bilinear),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            resample(&img, 10, 0, FilterType::Bilinear),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_resample_rejects_mismatched_buffer() {
        let img = SourceImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 10],
        };
        assert!(matches!(
            resample(&img, 5, 5, FilterType::Bilinear),
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_all_filter_types() {
        let img = textured_image(40, 20);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let pixels = resample(&img, 20, 10, filter).unwrap();
            assert_eq!(pixels.len(), 20 * 10 * 4);
        }
    }
}
