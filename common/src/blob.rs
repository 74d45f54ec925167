//! The placeholder PNG payload written for every icon size.

use std::io::Cursor;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::codecs::png::PngDecoder;
use image::{ImageDecoder, ImageFormat};

/// Base64 encoding of a 1x1 PNG.
pub const ICON_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYGBgAAAABQABXvMqOgAAAABJRU5ErkJggg==";

/// Decoded icon bytes. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBlob {
    bytes: Vec<u8>,
}

impl IconBlob {
    /// Decode the built-in placeholder icon.
    pub fn decode() -> Result<Self> {
        Self::from_base64(ICON_BASE64).context("Failed to decode built-in placeholder icon")
    }

    /// Decode a base64 string (standard alphabet, padded) into PNG bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .context("Invalid base64 icon data")?;

        let format = image::guess_format(&bytes).context("Icon data is not a recognized image")?;
        if format != ImageFormat::Png {
            anyhow::bail!("Icon data is {:?}, expected PNG", format);
        }

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Pixel dimensions from the PNG header.
    ///
    /// Only IHDR is parsed; image data chunks are not decoded.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let decoder = PngDecoder::new(Cursor::new(self.bytes.as_slice()))
            .context("Failed to read PNG header")?;
        Ok(decoder.dimensions())
    }
}

#[cfg(test)]
#[path = "blob_test.rs"]
mod tests;
