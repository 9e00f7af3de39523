//! # cc-core
//!
//! Core domain layer for Cloudy Clip.
//!
//! This crate holds everything that is independent of the host platform and
//! of the IPC boundary:
//!
//! - **clipboard**: the [`ClipboardItem`] value type, the [`ClipboardReader`]
//!   that produces it, data-URL construction, and content fingerprinting
//! - **ports**: the [`SystemClipboardPort`] abstraction over the OS clipboard
//! - **error**: [`ClipboardError`] and [`ClipboardResult`]
//!
//! Platform adapters (see `cc-platform`) implement the ports; the Tauri layer
//! (see `cc-tauri`) exposes the operations to the webview frontend.

pub mod clipboard;
pub mod error;
pub mod ports;

pub use clipboard::{ChangeTracker, ClipboardItem, ClipboardReader};
pub use error::{ClipboardError, ClipboardResult};
pub use ports::SystemClipboardPort;
