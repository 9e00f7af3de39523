//! The real OS clipboard behind the `cc-core` port.

use std::sync::Mutex;

use cc_core::{ClipboardError, ClipboardResult, SystemClipboardPort};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use image::DynamicImage;

/// System clipboard adapter backed by `clipboard-rs`.
///
/// The context is not `Sync`, so it lives behind a `Mutex`. The lock only
/// serializes calls into the backend; it does not make the text-then-image
/// read sequence atomic against external clipboard writers.
pub struct LocalClipboard {
    inner: Mutex<ClipboardContext>,
}

impl LocalClipboard {
    pub fn new() -> ClipboardResult<Self> {
        let context = new_context().map_err(|e| ClipboardError::Backend(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }
}

#[cfg(target_os = "linux")]
fn new_context(
) -> std::result::Result<ClipboardContext, Box<dyn std::error::Error + Send + Sync>> {
    use clipboard_rs::ClipboardContextX11Options;
    ClipboardContext::new_with_options(ClipboardContextX11Options { read_timeout: None })
}

#[cfg(not(target_os = "linux"))]
fn new_context(
) -> std::result::Result<ClipboardContext, Box<dyn std::error::Error + Send + Sync>> {
    ClipboardContext::new()
}

impl SystemClipboardPort for LocalClipboard {
    fn has_text(&self) -> bool {
        let ctx = self.inner.lock().unwrap();
        ctx.has(ContentFormat::Text)
    }

    fn read_text(&self) -> ClipboardResult<String> {
        let ctx = self.inner.lock().unwrap();
        ctx.get_text().map_err(|e| {
            log::warn!("advertised text flavor failed to extract: {}", e);
            ClipboardError::FlavorExtraction {
                flavor: "text",
                reason: e.to_string(),
            }
        })
    }

    fn has_image(&self) -> bool {
        let ctx = self.inner.lock().unwrap();
        ctx.has(ContentFormat::Image)
    }

    fn read_image(&self) -> ClipboardResult<DynamicImage> {
        let ctx = self.inner.lock().unwrap();
        let img = ctx.get_image().map_err(|e| {
            log::warn!("advertised image flavor failed to extract: {}", e);
            ClipboardError::FlavorExtraction {
                flavor: "image",
                reason: e.to_string(),
            }
        })?;
        img.get_dynamic_image()
            .map_err(|e| ClipboardError::ImageDecode(e.to_string()))
    }
}
