// SPDX-License-Identifier: MPL-2.0
//! Media type detection and image decoding.
//!
//! Files handed to the gallery (from the file dialog or a drop) only carry a
//! path, so their declared media type is derived from the extension, the same
//! way a browser fills `File.type`.

pub mod image;

use std::path::Path;

pub use image::{decode_bytes, decode_file, ImageData};

pub mod extensions {
    /// Raster image extensions the decoder understands, paired with their MIME type.
    pub const IMAGE_MEDIA_TYPES: &[(&str, &str)] = &[
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("tiff", "image/tiff"),
        ("tif", "image/tiff"),
        ("ico", "image/x-icon"),
    ];

    /// Non-image types recognized only so they can be reported and skipped.
    pub const OTHER_MEDIA_TYPES: &[(&str, &str)] = &[
        ("txt", "text/plain"),
        ("pdf", "application/pdf"),
        ("json", "application/json"),
        ("mp4", "video/mp4"),
        ("webm", "video/webm"),
        ("mp3", "audio/mpeg"),
        ("zip", "application/zip"),
    ];

    /// Image extensions for the file dialog filter.
    #[must_use]
    pub fn image_extensions() -> Vec<&'static str> {
        IMAGE_MEDIA_TYPES.iter().map(|(ext, _)| *ext).collect()
    }
}

/// Returns the MIME type declared by a file's extension, if known.
pub fn declared_media_type<P: AsRef<Path>>(path: P) -> Option<&'static str> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())?
        .to_lowercase();

    extensions::IMAGE_MEDIA_TYPES
        .iter()
        .chain(extensions::OTHER_MEDIA_TYPES.iter())
        .find(|(ext, _)| *ext == extension)
        .map(|(_, media_type)| *media_type)
}

/// Whether a declared media type denotes an image.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Whether the file at `path` declares an image type.
pub fn is_image_file<P: AsRef<Path>>(path: P) -> bool {
    declared_media_type(path).is_some_and(is_image_media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_map_to_image_types() {
        assert_eq!(declared_media_type("photo.jpg"), Some("image/jpeg"));
        assert_eq!(declared_media_type("photo.JPEG"), Some("image/jpeg"));
        assert_eq!(declared_media_type("shot.png"), Some("image/png"));
    }

    #[test]
    fn other_extensions_are_not_images() {
        assert_eq!(declared_media_type("notes.txt"), Some("text/plain"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("clip.mp4"));
    }

    #[test]
    fn unknown_or_missing_extension_has_no_type() {
        assert_eq!(declared_media_type("archive.xyz"), None);
        assert_eq!(declared_media_type("README"), None);
        assert!(!is_image_file("README"));
    }

    #[test]
    fn media_type_prefix_check() {
        assert!(is_image_media_type("image/webp"));
        assert!(!is_image_media_type("video/mp4"));
        assert!(!is_image_media_type("imagery/fake"));
    }

    #[test]
    fn dialog_filter_lists_every_image_extension() {
        let exts = extensions::image_extensions();
        assert_eq!(exts.len(), extensions::IMAGE_MEDIA_TYPES.len());
        assert!(exts.contains(&"webp"));
    }
}
