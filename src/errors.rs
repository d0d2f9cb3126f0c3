//! Copy-page error types
//!
//! None of these reach the user as text. A failed fetch shows the "x" glyph,
//! everything else is only logged.

use std::fmt;

/// Error type for copy-page operations
#[derive(Debug, Clone, PartialEq)]
pub enum CopyPageError {
    /// The button has no `data-url`, or it is empty
    MissingSourceUrl,
    /// The request never produced a response (network failure, CORS, bad URL)
    Fetch(String),
    /// A response arrived but its body could not be read as text
    Body(String),
    Clipboard(String),
    Dom(String),
    Settings(String),
}

impl CopyPageError {
    /// Whether this error is shown to the user as the failure glyph
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CopyPageError::MissingSourceUrl | CopyPageError::Fetch(_) | CopyPageError::Body(_)
        )
    }
}

impl fmt::Display for CopyPageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CopyPageError::MissingSourceUrl => write!(f, "Copy button has no source URL"),
            CopyPageError::Fetch(e) => write!(f, "Fetch error: {}", e),
            CopyPageError::Body(e) => write!(f, "Failed to read response body: {}", e),
            CopyPageError::Clipboard(e) => write!(f, "Clipboard write failed: {}", e),
            CopyPageError::Dom(e) => write!(f, "DOM error: {}", e),
            CopyPageError::Settings(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for CopyPageError {}
