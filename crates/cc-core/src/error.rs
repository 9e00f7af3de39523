//! Error types for clipboard operations.

use thiserror::Error;

/// Result type for clipboard operations.
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

/// Errors that can occur while reading the system clipboard.
///
/// Nothing here is caught or retried internally; every error propagates to
/// the command layer, which logs it and hands a stringified form to the
/// frontend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard facility itself is unavailable or failed.
    #[error("clipboard backend error: {0}")]
    Backend(String),

    /// The clipboard advertised a flavor but extracting it failed. This is a
    /// contract violation by the OS clipboard provider and is not expected
    /// in normal operation.
    #[error("clipboard advertises {flavor} but extraction failed: {reason}")]
    FlavorExtraction {
        /// The advertised flavor ("text" or "image").
        flavor: &'static str,
        /// Backend-supplied failure description.
        reason: String,
    },

    /// Decoding the native image representation into a bitmap failed.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// Encoding the bitmap as PNG failed.
    #[error("image encode error: {0}")]
    ImageEncode(String),
}
