//! Clipboard utilities for copying text
//!
//! Provides a cross-platform way to copy text to the clipboard using
//! the Web Clipboard API.

use crate::components::copy_page::ClipboardSink;
use crate::errors::CopyPageError;

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API to copy the provided text.
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(CopyPageError::Clipboard)` if there is no window or the write was rejected
pub async fn copy_to_clipboard(text: &str) -> Result<(), CopyPageError> {
    let window = web_sys::window().ok_or_else(|| CopyPageError::Clipboard("No window".to_string()))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| CopyPageError::Clipboard(format!("{:?}", e)))
}

/// Clipboard sink backed by `navigator.clipboard`
///
/// Writes are spawned and never awaited by the caller; a rejected write
/// (permission denied, document not focused) is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardSink for BrowserClipboard {
    fn write_text(&self, text: String) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = copy_to_clipboard(&text).await {
                log::warn!("{}", e);
            }
        });
    }
}
