//! Default identifiers and fixed strings shared across the crate.

// =============================================================
// Storage
// =============================================================

/// localStorage key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "welcome_admin_theme";

// =============================================================
// DOM contract
// =============================================================

/// Id of the dark stylesheet `<link>` provided by the admin skin.
pub const DARK_LINK_ID: &str = "jazzmin-dark-mode-theme";

/// Navbar container that receives the toggle as its first child.
pub const NAV_SELECTOR: &str = "#jazzy-navbar .navbar-nav.ml-auto";

pub const BUTTON_ID: &str = "welcome-admin-darkmode-toggle";
pub const ICON_ID: &str = "welcome-admin-darkmode-icon";

/// Class toggled on both `<html>` and `<body>`.
pub const DARK_MODE_CLASS: &str = "dark-mode";

pub const NAV_ITEM_CLASS: &str = "nav-item";
pub const BUTTON_CLASS: &str = "nav-link btn";
pub const BUTTON_LABEL: &str = "Toggle dark mode";
pub const ICON_GLYPH: &str = "\u{1F319}";
pub const ICON_FONT_SIZE: &str = "1.05rem";
pub const ICON_LINE_HEIGHT: &str = "1";

// =============================================================
// Media
// =============================================================

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const MEDIA_ALL: &str = "all";
pub const MEDIA_NONE: &str = "not all";

// =============================================================
// Tooltips
// =============================================================

pub const TITLE_DARK_ON: &str = "Dark mode on (click for light mode)";
pub const TITLE_DARK_OFF: &str = "Dark mode off (click for dark mode)";
