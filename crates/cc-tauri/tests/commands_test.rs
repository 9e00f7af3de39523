//! IPC command tests.
//!
//! The commands are thin wrappers over [`ClipboardState`], so the polling
//! and read behavior is exercised through the state with a fake clipboard
//! port; the command items themselves are checked for exposure.

use std::sync::{Arc, Mutex};

use cc_core::{ClipboardError, ClipboardResult, SystemClipboardPort};
use cc_tauri::commands::map_err;
use cc_tauri::ClipboardState;
use image::DynamicImage;

/// Fake clipboard whose text can be swapped out between polls.
#[derive(Default)]
struct ScriptedClipboardPort {
    text: Mutex<Option<String>>,
}

impl ScriptedClipboardPort {
    fn set_text(&self, text: Option<&str>) {
        *self.text.lock().unwrap() = text.map(str::to_string);
    }
}

impl SystemClipboardPort for ScriptedClipboardPort {
    fn has_text(&self) -> bool {
        self.text.lock().unwrap().is_some()
    }

    fn read_text(&self) -> ClipboardResult<String> {
        self.text
            .lock()
            .unwrap()
            .clone()
            .ok_or(ClipboardError::FlavorExtraction {
                flavor: "text",
                reason: "no text on fake clipboard".into(),
            })
    }

    fn has_image(&self) -> bool {
        false
    }

    fn read_image(&self) -> ClipboardResult<DynamicImage> {
        Err(ClipboardError::FlavorExtraction {
            flavor: "image",
            reason: "no image on fake clipboard".into(),
        })
    }
}

#[test]
fn test_clipboard_commands_are_exposed() {
    let _ = cc_tauri::commands::get_latest_clipboard_item;
    let _ = cc_tauri::commands::poll_clipboard_item;
}

#[test]
fn test_poll_suppresses_unchanged_content() {
    let port = Arc::new(ScriptedClipboardPort::default());
    port.set_text(Some("hello"));
    let state = ClipboardState::with_port(port.clone());

    let first = state.poll_new_item().unwrap();
    assert_eq!(first.unwrap().text(), Some("hello"));

    assert!(state.poll_new_item().unwrap().is_none());
}

#[test]
fn test_poll_picks_up_changed_content() {
    let port = Arc::new(ScriptedClipboardPort::default());
    port.set_text(Some("hello"));
    let state = ClipboardState::with_port(port.clone());

    assert!(state.poll_new_item().unwrap().is_some());

    port.set_text(Some("world"));
    let changed = state.poll_new_item().unwrap();
    assert_eq!(changed.unwrap().text(), Some("world"));
}

#[test]
fn test_poll_of_empty_clipboard_yields_none() {
    let state = ClipboardState::with_port(Arc::new(ScriptedClipboardPort::default()));

    assert!(state.poll_new_item().unwrap().is_none());
}

#[test]
fn test_get_latest_is_not_affected_by_poll_deduplication() {
    let port = Arc::new(ScriptedClipboardPort::default());
    port.set_text(Some("hello"));
    let state = ClipboardState::with_port(port.clone());

    let first = state.reader().get_latest_clipboard_item().unwrap();
    let second = state.reader().get_latest_clipboard_item().unwrap();

    assert_eq!(first, second);
    assert_eq!(second.text(), Some("hello"));
}

#[test]
fn test_map_err_yields_the_display_string() {
    let err = ClipboardError::FlavorExtraction {
        flavor: "image",
        reason: "boom".into(),
    };
    assert_eq!(
        map_err(err),
        "clipboard advertises image but extraction failed: boom"
    );
}
