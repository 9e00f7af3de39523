//! Clipboard-related Tauri commands.

use cc_core::ClipboardItem;
use tauri::State;

use crate::commands::error::map_err;
use crate::state::ClipboardState;

/// Return the most recent clipboard item.
///
/// If the clipboard contains text, `text` is non-null. If it contains an
/// image, `imageDataUrl` is a Data URL (`data:image/png;base64,...`). The
/// clipboard may expose either flavor, both, or neither.
#[tauri::command]
pub fn get_latest_clipboard_item(
    state: State<'_, ClipboardState>,
) -> Result<ClipboardItem, String> {
    state
        .reader()
        .get_latest_clipboard_item()
        .map_err(|e| {
            log::error!("failed to read clipboard: {}", e);
            map_err(e)
        })
}

/// Return the clipboard item only when its content changed since the last
/// poll. The frontend calls this on an interval; unchanged content and empty
/// clipboards yield `null`.
#[tauri::command]
pub fn poll_clipboard_item(
    state: State<'_, ClipboardState>,
) -> Result<Option<ClipboardItem>, String> {
    let polled = state.poll_new_item().map_err(|e| {
        log::error!("failed to poll clipboard: {}", e);
        map_err(e)
    })?;

    if polled.is_some() {
        log::debug!("clipboard poll picked up new content");
    }

    Ok(polled)
}
