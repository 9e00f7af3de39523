//! OS clipboard adapter.

mod local;

pub use local::LocalClipboard;
