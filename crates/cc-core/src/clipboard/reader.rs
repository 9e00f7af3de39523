//! Clipboard reading - one call, one [`ClipboardItem`].

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::clipboard::{data_url, ClipboardItem};
use crate::error::{ClipboardError, ClipboardResult};
use crate::ports::SystemClipboardPort;

/// Produces a [`ClipboardItem`] reflecting the current OS clipboard state.
///
/// The reader is read-only: it never modifies the clipboard. It performs no
/// caching and no deduplication; every call is a fresh read.
pub struct ClipboardReader {
    port: Arc<dyn SystemClipboardPort>,
}

impl ClipboardReader {
    pub fn new(port: Arc<dyn SystemClipboardPort>) -> Self {
        Self { port }
    }

    /// Read the clipboard and return whichever of the two supported flavors
    /// it currently exposes.
    ///
    /// Extraction failures are not suppressed per flavor: if the image read
    /// fails after the text read succeeded, the whole call fails rather than
    /// returning text alone.
    pub fn get_latest_clipboard_item(&self) -> ClipboardResult<ClipboardItem> {
        let text = if self.port.has_text() {
            Some(self.port.read_text()?)
        } else {
            None
        };

        let image_data_url = if self.port.has_image() {
            let bitmap = self.port.read_image()?;
            let png = encode_png(bitmap)?;
            Some(data_url::png_data_url(&png))
        } else {
            None
        };

        Ok(ClipboardItem::new(text, image_data_url))
    }
}

/// PNG-encode a decoded bitmap into an in-memory buffer.
fn encode_png(bitmap: DynamicImage) -> ClipboardResult<Vec<u8>> {
    let normalized = normalize(bitmap);
    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgba8(normalized)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| ClipboardError::ImageEncode(e.to_string()))?;
    Ok(png_bytes)
}

/// Guarantee the encode step always receives RGBA8 pixels, regardless of how
/// the OS decoded the native image flavor. Bitmaps already in that format
/// pass through without a copy.
fn normalize(bitmap: DynamicImage) -> RgbaImage {
    match bitmap {
        DynamicImage::ImageRgba8(buffer) => buffer,
        other => other.to_rgba8(),
    }
}
