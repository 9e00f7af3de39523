use cc_core::ClipboardError;

/// Centralized error mapping for commands.
///
/// This function provides a single upgrade path for future
/// command-error enhancements (e.g., error codes).
pub fn map_err(err: ClipboardError) -> String {
    err.to_string()
}
