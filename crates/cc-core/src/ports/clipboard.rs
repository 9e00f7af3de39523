//! Clipboard port - abstracts access to the OS clipboard.
//!
//! The reader never touches the system clipboard directly; it goes through
//! this port, so tests can substitute a fake without a real clipboard.

use image::DynamicImage;

use crate::error::ClipboardResult;

/// Read-only view of the system clipboard's current transferable content.
///
/// The two flavor checks are independent queries against shared OS state.
/// Implementations do not snapshot between them; a concurrent external
/// clipboard writer may change the content between the checks, so a combined
/// read is best-effort.
pub trait SystemClipboardPort: Send + Sync {
    /// Whether the current content supports a plain-text representation.
    fn has_text(&self) -> bool;

    /// Extract the plain-text representation.
    ///
    /// Only meaningful after [`has_text`](Self::has_text) returned true;
    /// failure at that point is a provider contract violation and surfaces
    /// as [`ClipboardError::FlavorExtraction`](crate::ClipboardError).
    fn read_text(&self) -> ClipboardResult<String>;

    /// Whether the current content supports a raster-image representation.
    fn has_image(&self) -> bool;

    /// Extract the image as a decoded in-memory bitmap.
    fn read_image(&self) -> ClipboardResult<DynamicImage>;
}
