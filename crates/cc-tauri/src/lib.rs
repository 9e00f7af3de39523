//! # cc-tauri
//!
//! Tauri integration layer for Cloudy Clip.
//!
//! This crate provides:
//! - Tauri command handlers (the IPC surface the webview frontend calls)
//! - Managed state wiring the domain reader to the platform clipboard

pub mod commands;
pub mod state;

pub use state::ClipboardState;
