//! Theme preference and effective mode.
//!
//! A stored preference is `Option<Preference>`: `None` means the user hasn't
//! chosen and the page follows the system color scheme. The effective mode is
//! always derived from that and the system setting, never stored.

use crate::consts::{DARK_SCHEME_QUERY, MEDIA_ALL, MEDIA_NONE, TITLE_DARK_OFF, TITLE_DARK_ON};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// An explicit theme choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    Dark,
    Light,
}

impl Preference {
    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `dark`/`light` is unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The explicit choice that renders the opposite of `dark_enabled`.
    #[must_use]
    pub fn opposite_of(dark_enabled: bool) -> Self {
        if dark_enabled { Self::Light } else { Self::Dark }
    }
}

/// Whether dark mode renders for `preference` given the system setting.
#[must_use]
pub fn is_dark_enabled(preference: Option<Preference>, system_dark: bool) -> bool {
    match preference {
        Some(Preference::Dark) => true,
        Some(Preference::Light) => false,
        None => system_dark,
    }
}

/// `media` attribute for the dark stylesheet link.
///
/// When following the system the live query is used so the browser keeps
/// evaluating it on its own.
#[must_use]
pub fn stylesheet_media(preference: Option<Preference>) -> &'static str {
    match preference {
        Some(Preference::Dark) => MEDIA_ALL,
        Some(Preference::Light) => MEDIA_NONE,
        None => DARK_SCHEME_QUERY,
    }
}

/// Tooltip for the toggle button.
#[must_use]
pub fn button_title(dark_enabled: bool) -> &'static str {
    if dark_enabled { TITLE_DARK_ON } else { TITLE_DARK_OFF }
}
