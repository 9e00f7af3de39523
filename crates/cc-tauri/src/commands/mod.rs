pub mod clipboard;
pub mod error;

pub use clipboard::{get_latest_clipboard_item, poll_clipboard_item};
pub use error::map_err;
