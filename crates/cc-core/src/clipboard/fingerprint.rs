//! Content fingerprinting for poll deduplication.
//!
//! The frontend polls the clipboard; the backend remembers the fingerprint
//! of the last content it handed out and suppresses repeats. One tracker per
//! application state, matching the single last-seen fingerprint the desktop
//! app keeps.

use std::hash::Hasher;

use twox_hash::XxHash64;

use crate::clipboard::ClipboardItem;

/// Fast 64-bit XXH64 hash of raw bytes.
pub fn fingerprint(raw: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(raw);
    hasher.finish()
}

/// Remembers the fingerprint of the last observed clipboard item.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_seen: Option<u64>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly when `item` carries content whose fingerprint
    /// differs from the last observed one, updating the tracker in that
    /// case. Empty items are never considered new and do not update the
    /// tracker.
    pub fn observe(&mut self, item: &ClipboardItem) -> bool {
        if item.is_empty() {
            return false;
        }

        let print = item.content_fingerprint();
        if self.last_seen == Some(print) {
            return false;
        }

        self.last_seen = Some(print);
        true
    }
}
