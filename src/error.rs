//! Theme toggle errors.
//!
//! None of these are fatal. The controller maps storage errors to "no stored
//! preference" and DOM errors to a no-op; they exist so the fallback is
//! explicit and can be logged and tested.

/// Errors produced while reading config, touching storage, or mutating the DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The browser refused to hand out a storage object (disabled, sandboxed).
    #[error("preference storage unavailable")]
    StorageUnavailable,

    /// A storage call threw (security or quota errors).
    #[error("preference storage access failed: {0}")]
    StorageAccess(String),

    /// The host-supplied config could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl ThemeError {
    /// Stable code used in log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StorageUnavailable => "E_STORAGE_UNAVAILABLE",
            Self::StorageAccess(_) => "E_STORAGE_ACCESS",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::Dom(_) => "E_DOM",
        }
    }

    /// Whether the error came from the preference store.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable | Self::StorageAccess(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
