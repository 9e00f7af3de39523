//! Clipboard domain models and reading logic.

mod data_url;
mod fingerprint;
mod item;
mod reader;

pub use data_url::{png_data_url, PNG_DATA_URL_PREFIX};
pub use fingerprint::{fingerprint, ChangeTracker};
pub use item::ClipboardItem;
pub use reader::ClipboardReader;

#[cfg(test)]
mod tests;
