//! Shared fixtures for unit tests: synthetic rasters and encoded sources.

use std::io::Cursor;

use crate::decode::SourceImage;

/// Gradient raster with a bit of high-frequency texture so JPEG output size
/// actually responds to quality.
pub fn textured_image(width: u32, height: u32) -> SourceImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let noise = ((x.wrapping_mul(73) ^ y.wrapping_mul(151)) % 64) as u8;
            pixels.push(((x * 255) / width.max(1)) as u8 ^ noise);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push(noise.wrapping_mul(3));
            pixels.push(255);
        }
    }
    SourceImage::new(width, height, pixels)
}

/// Encode a raster with the image crate into the given container format.
pub fn encode_source(image: &SourceImage, format: image::ImageFormat) -> Vec<u8> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .expect("fixture buffer matches dimensions");
    let dynamic = image::DynamicImage::ImageRgba8(rgba);
    let dynamic = if format == image::ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(dynamic.into_rgb8())
    } else {
        dynamic
    };
    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, format)
        .expect("fixture encodes");
    buffer.into_inner()
}

/// PNG bytes of a textured raster.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_source(&textured_image(width, height), image::ImageFormat::Png)
}

/// JPEG bytes of a textured raster.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_source(&textured_image(width, height), image::ImageFormat::Jpeg)
}

/// Insert an APP1 Exif segment holding only an Orientation tag right after
/// the SOI marker of `jpeg`.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    let [hi, lo] = orientation.to_be_bytes();
    #[rustfmt::skip]
    let app1: [u8; 36] = [
        0xFF, 0xE1, 0x00, 0x22,
        b'E', b'x', b'i', b'f', 0x00, 0x00,
        // Big-endian TIFF header, IFD0 at offset 8
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
        // One entry: Orientation (0x0112), SHORT, count 1
        0x00, 0x01,
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, hi, lo, 0x00, 0x00,
        // No next IFD
        0x00, 0x00, 0x00, 0x00,
    ];

    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}
