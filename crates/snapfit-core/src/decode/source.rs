//! Source decoding with format resolution and EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use tracing::debug;

use super::{DecodeError, Orientation, SourceImage};
use crate::format::ImageFormat;

/// Decode source bytes into an RGBA raster, applying EXIF orientation.
///
/// The format is taken from the bytes when they carry a recognizable
/// signature of a supported format; otherwise the declared `mime_type` is
/// used. The resolved format is returned alongside the raster.
///
/// # Errors
///
/// * `DecodeError::EmptyInput` for an empty buffer
/// * `DecodeError::UnsupportedFormat` when neither the bytes nor the MIME
///   type identify JPEG, PNG or WebP
/// * `DecodeError::CorruptedFile` when the codec rejects the bytes
/// * `DecodeError::InvalidDimensions` for a zero-sized raster
pub fn decode_image(
    bytes: &[u8],
    mime_type: &str,
) -> Result<(SourceImage, ImageFormat), DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let format = resolve_format(bytes, mime_type)?;
    debug!(declared = mime_type, resolved = %format, len = bytes.len(), "decoding source");

    let orientation = get_orientation(bytes);

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba = apply_orientation(img, orientation).into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    Ok((SourceImage::from_rgba_image(rgba), format))
}

/// Pick the codec for a source buffer.
///
/// Content sniffing wins over the declared type, so a PNG uploaded with a
/// `image/jpeg` label still decodes.
fn resolve_format(bytes: &[u8], mime_type: &str) -> Result<ImageFormat, DecodeError> {
    let sniffed = image::guess_format(bytes)
        .ok()
        .and_then(ImageFormat::from_image_format);

    sniffed
        .or_else(|| ImageFormat::from_mime(mime_type))
        .ok_or_else(|| {
            if mime_type.trim().is_empty() {
                DecodeError::UnsupportedFormat("unknown".to_string())
            } else {
                DecodeError::UnsupportedFormat(mime_type.to_string())
            }
        })
}

/// Read the EXIF orientation from any container kamadak-exif understands.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
