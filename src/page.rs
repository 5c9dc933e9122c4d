//! DOM seam for the theme controller.
//!
//! The controller never queries the document itself. It asks a [`ThemePage`]
//! for element handles once and then mutates them through these traits, so
//! the same logic runs against web-sys in the browser and an in-memory page
//! in tests.

use crate::config::ThemeConfig;

/// The dark stylesheet `<link>`. Only its `media` attribute is touched.
pub trait StylesheetLink {
    fn set_media(&self, media: &str);
}

/// The injected toggle button.
pub trait ToggleButton {
    /// Whether the icon child is still attached.
    fn has_icon(&self) -> bool;
    fn set_title(&self, title: &str);
}

/// Host page queries and document-wide mutations.
pub trait ThemePage {
    type Link: StylesheetLink;
    type Button: ToggleButton;

    /// Look up the dark stylesheet link by `config.dark_link_id`.
    fn dark_link(&self, config: &ThemeConfig) -> Option<Self::Link>;

    /// Whether `prefers-color-scheme: dark` matches. False when the host
    /// can't evaluate media queries.
    fn is_system_dark(&self) -> bool;

    /// Add or remove the dark-mode class on both the root and body elements.
    fn set_dark_class(&self, enabled: bool);

    /// Insert the toggle as the first child of the nav container.
    ///
    /// Returns `None` without touching the page when the container is missing
    /// or a button with `config.button_id` already exists.
    fn insert_toggle_button(&self, config: &ThemeConfig) -> Option<Self::Button>;
}
