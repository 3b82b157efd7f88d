//! Raster formats understood by the pipeline and their MIME types.

use serde::{Deserialize, Serialize};

/// An image format the pipeline can both decode and encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossy JPEG.
    Jpeg,
    /// Lossless PNG. Quality has no effect.
    Png,
    /// Lossy WebP.
    WebP,
}

impl ImageFormat {
    /// Look up a format by MIME type.
    ///
    /// Matching ignores ASCII case, surrounding whitespace and any
    /// `;parameter` suffix. `image/jpg` and `image/pjpeg` are accepted as
    /// JPEG aliases.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Canonical MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Whether the encoder honours a quality setting for this format.
    pub fn is_lossy(self) -> bool {
        matches!(self, ImageFormat::Jpeg | ImageFormat::WebP)
    }

    /// Convert to the image crate's format tag.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::WebP => image::ImageFormat::WebP,
        }
    }

    /// Convert from the image crate's format tag, if supported.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::WebP => Some(ImageFormat::WebP),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_canonical() {
        assert_eq!(ImageFormat::from_mime("image/jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime("image/png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_mime("image/webp"), Some(ImageFormat::WebP));
    }

    #[test]
    fn test_from_mime_aliases_and_noise() {
        assert_eq!(ImageFormat::from_mime("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime("IMAGE/JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(
            ImageFormat::from_mime(" image/png ; charset=binary"),
            Some(ImageFormat::Png)
        );
    }

    #[test]
    fn test_from_mime_unknown() {
        assert_eq!(ImageFormat::from_mime(""), None);
        assert_eq!(ImageFormat::from_mime("image/gif"), None);
        assert_eq!(ImageFormat::from_mime("application/octet-stream"), None);
    }

    #[test]
    fn test_mime_round_trip() {
        for format in [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP] {
            assert_eq!(ImageFormat::from_mime(format.mime_type()), Some(format));
            assert_eq!(
                ImageFormat::from_image_format(format.to_image_format()),
                Some(format)
            );
        }
    }

    #[test]
    fn test_lossy_formats() {
        assert!(ImageFormat::Jpeg.is_lossy());
        assert!(ImageFormat::WebP.is_lossy());
        assert!(!ImageFormat::Png.is_lossy());
    }

    #[test]
    fn test_unsupported_image_format() {
        assert_eq!(ImageFormat::from_image_format(image::ImageFormat::Gif), None);
    }
}
