//! Managed application state for the clipboard commands.

use std::sync::{Arc, Mutex};

use cc_core::{ChangeTracker, ClipboardItem, ClipboardReader, ClipboardResult, SystemClipboardPort};
use cc_platform::LocalClipboard;

/// State shared by the clipboard commands: the reader over the OS clipboard
/// plus the last-seen fingerprint used to deduplicate polls.
pub struct ClipboardState {
    reader: ClipboardReader,
    tracker: Mutex<ChangeTracker>,
}

impl ClipboardState {
    /// Wire the reader to the real OS clipboard.
    pub fn new() -> ClipboardResult<Self> {
        let port = LocalClipboard::new()?;
        Ok(Self::with_port(Arc::new(port)))
    }

    /// Wire the reader to any clipboard port. Tests pass a fake here.
    pub fn with_port(port: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            reader: ClipboardReader::new(port),
            tracker: Mutex::new(ChangeTracker::new()),
        }
    }

    pub fn reader(&self) -> &ClipboardReader {
        &self.reader
    }

    /// Read the clipboard and return the item only when its content differs
    /// from the previous poll. Empty reads and repeats yield `None`.
    pub fn poll_new_item(&self) -> ClipboardResult<Option<ClipboardItem>> {
        let item = self.reader.get_latest_clipboard_item()?;

        let mut tracker = self.tracker.lock().unwrap();
        if tracker.observe(&item) {
            Ok(Some(item))
        } else {
            Ok(None)
        }
    }
}
