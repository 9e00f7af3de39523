//! The clipboard item value type.

use serde::{Deserialize, Serialize};

use crate::clipboard::fingerprint;

/// One atomic read of the system clipboard.
///
/// A fresh item is constructed on every read call; it has no identity beyond
/// its field values and is never mutated after construction. Either field,
/// both, or neither may be present, depending on which flavors the clipboard
/// exposed at read time.
///
/// Serializes with the field names the frontend expects (`text`,
/// `imageDataUrl`); absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItem {
    text: Option<String>,
    image_data_url: Option<String>,
}

impl ClipboardItem {
    /// Construct an item from whichever flavors were read.
    pub fn new(text: Option<String>, image_data_url: Option<String>) -> Self {
        Self {
            text,
            image_data_url,
        }
    }

    /// The plain-text payload, if the clipboard held one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The image payload as a `data:image/png;base64,...` string, if the
    /// clipboard held an image.
    pub fn image_data_url(&self) -> Option<&str> {
        self.image_data_url.as_deref()
    }

    /// True when the clipboard exposed neither supported flavor.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image_data_url.is_none()
    }

    /// 64-bit fingerprint of the carried content, used by the polling
    /// command to suppress items the frontend has already seen.
    ///
    /// Each field is hashed behind a domain tag so that a text-only item and
    /// an image-only item with byte-identical payloads do not collide.
    pub fn content_fingerprint(&self) -> u64 {
        let mut raw = Vec::new();
        if let Some(text) = &self.text {
            raw.push(0u8);
            raw.extend_from_slice(text.as_bytes());
        }
        if let Some(url) = &self.image_data_url {
            raw.push(1u8);
            raw.extend_from_slice(url.as_bytes());
        }
        fingerprint(&raw)
    }
}
