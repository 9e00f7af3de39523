//! Ports - abstractions over external collaborators.

pub mod clipboard;

pub use clipboard::SystemClipboardPort;
