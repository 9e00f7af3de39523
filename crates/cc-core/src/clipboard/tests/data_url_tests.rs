//! Tests for data-URL construction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::clipboard::{png_data_url, PNG_DATA_URL_PREFIX};

#[test]
fn test_prefix_is_the_contract_string() {
    assert_eq!(PNG_DATA_URL_PREFIX, "data:image/png;base64,");
}

#[test]
fn test_data_url_is_prefix_plus_standard_base64() {
    let bytes = b"\x89PNG\r\n\x1a\n";
    let url = png_data_url(bytes);
    assert_eq!(
        url,
        format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(bytes))
    );
}

#[test]
fn test_payload_decodes_back_to_original_bytes() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    let url = png_data_url(&bytes);
    let payload = url.strip_prefix(PNG_DATA_URL_PREFIX).unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
}
