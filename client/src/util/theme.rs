//! Page theme: stored choice, system fallback, and the `data-theme` switch.
//!
//! The choice lives in `localStorage` under [`STORAGE_KEY`] as `"dark"` or
//! `"light"`. With nothing stored the page follows `prefers-color-scheme`.
//! Off the browser every read yields [`Theme::Light`] and writes do nothing,
//! so server rendering always emits the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "kspedia_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Older builds stored `"true"`/`"false"`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" | "true" => Some(Self::Dark),
            "light" | "false" => Some(Self::Light),
            _ => None,
        }
    }

    /// Value of the `data-theme` attribute, also the stored value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Button label naming the theme a click switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "☾ 深色",
            Self::Dark => "☀ 浅色",
        }
    }
}

/// Stored choice, else the system preference, else light.
#[must_use]
pub fn preferred() -> Theme {
    stored().or_else(system).unwrap_or_default()
}

fn stored() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        Theme::from_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let query = web_sys::window()?.match_media("(prefers-color-scheme: dark)").ok()??;
        query.matches().then_some(Theme::Dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Set `data-theme` on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to set data-theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it, and remember the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.other();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(STORAGE_KEY, next.as_str()).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }
    next
}
