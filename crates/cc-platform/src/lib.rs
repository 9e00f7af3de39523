//! # cc-platform
//!
//! Platform-specific implementations for Cloudy Clip. Currently this is the
//! [`LocalClipboard`] adapter, which implements the `cc-core` clipboard port
//! on top of the OS clipboard.

pub mod clipboard;

pub use clipboard::LocalClipboard;
