//! Theme selection and persistence.
//!
//! The theme is the presentation layer injected under every screen: a single
//! class on `<html>` switches the CSS custom properties the stylesheet reads.
//! The preference lives in `localStorage`; browser access only happens with
//! the `hydrate` feature.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "kala_connect_dark";
const DARK_CLASS: &str = "theme-dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Decode a stored preference; anything but `"true"`/`"false"` is ignored.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph for the toggle button (shows the theme you would switch to).
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{263e}",
            Self::Dark => "\u{2600}",
        }
    }
}

/// Read the stored theme, falling back to the system color-scheme preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            let stored = storage.get_item(STORAGE_KEY).ok().flatten();
            if let Some(theme) = Theme::from_stored(stored.as_deref()) {
                return theme;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        Theme::from_dark(prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set or clear the dark theme class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let _ = if theme.is_dark() { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (theme, DARK_CLASS);
    }
}

/// Switch themes, apply the result, and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, next.stored_value());
        }
    }
    next
}
