use arboard::Clipboard;

/// Put `text` on the system clipboard. Best-effort: a missing or broken
/// clipboard logs a warning and reports failure so the caller can offer
/// the text for manual copying instead.
pub fn copy_text(text: &str) -> bool {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            false
        }
    }
}
