//! Feedback glyphs swapped into the copy button's `svg`
//!
//! Both are inner markup for a 24x24 viewBox, matching the material icons the
//! docs theme ships.

/// Checkmark shown after the page text has been copied
pub const CHECK_GLYPH: &str = r#"<path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/>"#;

/// "x" shown when the page source could not be fetched
pub const X_GLYPH: &str = r#"<path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>"#;
