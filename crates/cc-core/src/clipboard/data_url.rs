//! Inline data-URL construction for clipboard images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Fixed prefix of every image payload handed to the frontend. Callers parse
/// against this exact string; do not change it.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes in a self-describing inline data URL.
pub fn png_data_url(png_bytes: &[u8]) -> String {
    format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png_bytes))
}
