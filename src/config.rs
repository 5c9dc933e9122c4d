//! Theme toggle configuration.
//!
//! Every field defaults to the admin skin's fixed identifiers in
//! [`crate::consts`]. A host page may override any subset by passing a JSON
//! object to the wasm entry point, e.g. `{"storage_key": "staff_theme"}`.

use serde::Deserialize;

use crate::consts::{BUTTON_ID, DARK_LINK_ID, ICON_ID, NAV_SELECTOR, STORAGE_KEY};
use crate::error::ThemeError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_link_id: String,
    pub nav_selector: String,
    pub button_id: String,
    pub icon_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            dark_link_id: DARK_LINK_ID.to_string(),
            nav_selector: NAV_SELECTOR.to_string(),
            button_id: BUTTON_ID.to_string(),
            icon_id: ICON_ID.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override object. Missing fields keep their defaults.
    ///
    /// Blank values are rejected since an empty id or key can never match.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve an optional override, falling back to defaults when absent.
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, ThemeError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("dark_link_id", &self.dark_link_id),
            ("nav_selector", &self.nav_selector),
            ("button_id", &self.button_id),
            ("icon_id", &self.icon_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::ConfigParse(format!("{name} must not be blank")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
