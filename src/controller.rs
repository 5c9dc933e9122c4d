//! Theme controller: reconciles the stored preference, the system color
//! scheme, the dark stylesheet, and the toggle button.
//!
//! All DOM access goes through the handles obtained at [`ThemeController::init`].
//! Every missing element degrades to a no-op for the operation that needs it
//! and storage failures degrade to "follow the system". Nothing here fails.

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::page::{StylesheetLink, ThemePage, ToggleButton};
use crate::preference::{self, Preference};
use crate::store::{self, PreferenceStore};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// In-session theme state.
///
/// Constructed from storage at init and changed only by a toggle click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    preference: Option<Preference>,
}

impl ThemeState {
    #[must_use]
    pub fn new(preference: Option<Preference>) -> Self {
        Self { preference }
    }

    /// Current choice; `None` while following the system.
    #[must_use]
    pub fn preference(&self) -> Option<Preference> {
        self.preference
    }

    fn choose(&mut self, preference: Preference) {
        self.preference = Some(preference);
    }
}

pub struct ThemeController<P: ThemePage, S: PreferenceStore> {
    page: P,
    store: S,
    config: ThemeConfig,
    link: Option<P::Link>,
    button: Option<P::Button>,
    state: ThemeState,
}

impl<P: ThemePage, S: PreferenceStore> ThemeController<P, S> {
    /// Bind to the page without touching it.
    ///
    /// Only the dark link is looked up here; the button is created by
    /// [`Self::init`].
    #[must_use]
    pub fn new(page: P, store: S, config: ThemeConfig) -> Self {
        let link = page.dark_link(&config);
        Self { page, store, config, link, button: None, state: ThemeState::default() }
    }

    /// Bring the page to its initial themed state.
    ///
    /// Returns `None` and leaves the page untouched when it has no dark
    /// stylesheet link, since there is nothing to theme. Otherwise reads the
    /// stored preference, injects the button, applies the theme, and syncs
    /// the tooltip. Event wiring is left to the host binding, which forwards
    /// to [`Self::handle_click`] and [`Self::handle_system_change`].
    pub fn init(page: P, store: S, config: ThemeConfig) -> Option<Self> {
        let mut controller = Self::new(page, store, config);
        if controller.link.is_none() {
            log::debug!("theme: no #{} on page; theming disabled", controller.config.dark_link_id);
            return None;
        }

        controller.state = ThemeState::new(controller.stored_preference());
        controller.button = controller.build_toggle_button();
        let preference = controller.state.preference();
        controller.apply_theme(preference);
        controller.sync_button_state(controller.button.as_ref(), preference);
        Some(controller)
    }

    // --- Storage ---

    /// Stored preference with storage failures surfaced.
    pub fn read_stored_preference(&self) -> Result<Option<Preference>, ThemeError> {
        store::load(&self.store, &self.config.storage_key)
    }

    /// Stored preference, unset when storage is unavailable.
    pub fn stored_preference(&self) -> Option<Preference> {
        store::load_or_unset(&self.store, &self.config.storage_key)
    }

    /// Persist `preference`; `None` removes the key. Returns whether the write
    /// reached storage.
    pub fn set_stored_preference(&self, preference: Option<Preference>) -> bool {
        store::save_or_ignore(&self.store, &self.config.storage_key, preference)
    }

    // --- Mode ---

    pub fn is_system_dark(&self) -> bool {
        self.page.is_system_dark()
    }

    pub fn is_dark_enabled(&self, preference: Option<Preference>) -> bool {
        preference::is_dark_enabled(preference, self.is_system_dark())
    }

    // --- DOM ---

    /// Set the dark-mode classes and the dark stylesheet's `media`.
    pub fn apply_theme(&self, preference: Option<Preference>) {
        let Some(link) = self.link.as_ref() else {
            return;
        };
        self.page.set_dark_class(self.is_dark_enabled(preference));
        link.set_media(preference::stylesheet_media(preference));
    }

    /// Inject the toggle button. Idempotent: a second call returns `None`.
    pub fn build_toggle_button(&self) -> Option<P::Button> {
        let button = self.page.insert_toggle_button(&self.config);
        if button.is_none() {
            log::debug!(
                "theme: toggle not inserted (no {} or #{} already present)",
                self.config.nav_selector,
                self.config.button_id
            );
        }
        button
    }

    /// Point the tooltip at the current effective mode.
    pub fn sync_button_state(&self, button: Option<&P::Button>, preference: Option<Preference>) {
        let Some(button) = button else {
            return;
        };
        if !button.has_icon() {
            return;
        }
        button.set_title(preference::button_title(self.is_dark_enabled(preference)));
    }

    // --- Events ---

    /// Toggle to the opposite of what is rendered and remember it.
    pub fn handle_click(&mut self) -> Preference {
        let next = Preference::opposite_of(self.is_dark_enabled(self.state.preference()));
        self.state.choose(next);
        self.set_stored_preference(Some(next));
        log::info!("theme: switched to {}", next.as_str());
        self.apply_theme(Some(next));
        self.sync_button_state(self.button.as_ref(), Some(next));
        next
    }

    /// React to an OS color-scheme change.
    ///
    /// Only re-applies while storage holds no explicit choice; once the user
    /// has picked a theme, system changes are ignored. Returns whether the
    /// page was updated.
    pub fn handle_system_change(&self) -> bool {
        if self.stored_preference().is_some() {
            return false;
        }
        self.apply_theme(None);
        self.sync_button_state(self.button.as_ref(), None);
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn button(&self) -> Option<&P::Button> {
        self.button.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }
}
