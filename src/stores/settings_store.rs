/// Copy-page handler settings
/// Defaults cover the stock docs theme; a page can override any field with a
/// JSON object in the `data-copy-page` attribute of the `<html>` element.
use serde::Deserialize;

use crate::components::icons::{CHECK_GLYPH, X_GLYPH};
use crate::errors::CopyPageError;

/// Attribute on the document element holding the JSON override
pub const SETTINGS_ATTRIBUTE: &str = "data-copy-page";

/// Selector of the copy button in the stock docs theme
pub const DEFAULT_SELECTOR: &str = "#copy-page-btn";

/// How long the success/failure glyph stays up before the icon reverts
pub const DEFAULT_FEEDBACK_MS: u32 = 1500;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandlerSettings {
    pub selector: String,
    pub feedback_ms: u32,
    pub success_glyph: String,
    pub failure_glyph: String,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            feedback_ms: DEFAULT_FEEDBACK_MS,
            success_glyph: CHECK_GLYPH.to_string(),
            failure_glyph: X_GLYPH.to_string(),
        }
    }
}

impl HandlerSettings {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, CopyPageError> {
        let settings: HandlerSettings =
            serde_json::from_str(raw).map_err(|e| CopyPageError::Settings(e.to_string()))?;

        if settings.selector.trim().is_empty() {
            return Err(CopyPageError::Settings("selector must not be empty".to_string()));
        }

        Ok(settings)
    }
}

/// Resolve settings from the raw attribute value, falling back to defaults
pub fn resolve_settings(raw: Option<&str>) -> HandlerSettings {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return HandlerSettings::default();
    };

    match HandlerSettings::from_json(raw) {
        Ok(settings) => {
            log::info!("Loaded copy-page settings from {}", SETTINGS_ATTRIBUTE);
            settings
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", SETTINGS_ATTRIBUTE, e);
            HandlerSettings::default()
        }
    }
}

/// Read settings from the current document
pub fn load_settings() -> HandlerSettings {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(SETTINGS_ATTRIBUTE));

    resolve_settings(raw.as_deref())
}
