//! Theme preference applied at startup.
//!
//! Reads a saved preference from `localStorage` and applies it as a
//! `data-theme` attribute on the `<html>` element. The preference is read
//! once per page load and never written back; there is no toggle on the
//! site. Anything other than a stored "dark" means light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the saved preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute carrying the active theme on the document element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The two themes the stylesheet knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Absent or unrecognized values fall
    /// back to light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The `data-theme` attribute value for this theme.
    #[must_use]
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Read the saved theme preference from `localStorage`.
#[must_use]
pub fn load_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply the theme as a `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|window| window.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.attribute_value());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
