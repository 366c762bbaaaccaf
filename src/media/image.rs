// SPDX-License-Identifier: MPL-2.0
//! Decoding of uploaded image files into displayable RGBA pixels.

use crate::error::Result;
use iced::widget::image;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels, moved into the render handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes an encoded image (PNG, JPEG, GIF, ...) held in memory.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::error::Error::Decode) if the bytes are not
/// a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Reads and decodes the image file at `path`.
///
/// The read is asynchronous; decoding runs on the blocking pool so large
/// uploads do not stall the runtime.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read and
/// [`Error::Decode`](crate::error::Error::Decode) if its content is not an image.
pub async fn decode_file<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || decode_bytes(&bytes))
        .await
        .map_err(|err| crate::error::Error::Decode(err.to_string()))?
}
