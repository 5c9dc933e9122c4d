//! In-memory page and stores for native tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::consts::{BUTTON_LABEL, ICON_GLYPH};
use crate::error::ThemeError;
use crate::page::{StylesheetLink, ThemePage, ToggleButton};
use crate::store::PreferenceStore;

// =============================================================
// Stores
// =============================================================

/// Store whose every call throws, like `localStorage` under a SecurityError.
#[derive(Debug, Default)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageAccess("SecurityError".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageAccess("SecurityError".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageAccess("SecurityError".into()))
    }
}

// =============================================================
// Page
// =============================================================

/// Snapshot of everything the controller can touch.
#[derive(Debug, Default)]
pub struct FakeDom {
    pub has_link: bool,
    pub link_media: Option<String>,
    pub has_nav: bool,
    /// Ids of the nav container's children, first child first.
    pub nav_children: Vec<String>,
    pub root_dark: bool,
    pub body_dark: bool,
    pub system_dark: bool,
    pub buttons: Vec<FakeButtonState>,
    /// Count of every DOM write, for "nothing happened" assertions.
    pub mutations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeButtonState {
    pub id: String,
    pub label: String,
    pub icon_id: String,
    pub icon_glyph: String,
    pub title: Option<String>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    pub dom: Rc<RefCell<FakeDom>>,
}

impl FakePage {
    /// Page with the dark link and the navbar, system in `system_dark`.
    pub fn admin(system_dark: bool) -> Self {
        let page = Self::default();
        {
            let mut dom = page.dom.borrow_mut();
            dom.has_link = true;
            dom.has_nav = true;
            dom.system_dark = system_dark;
            dom.nav_children.push("user-menu".into());
        }
        page
    }

    pub fn set_system_dark(&self, dark: bool) {
        self.dom.borrow_mut().system_dark = dark;
    }

    pub fn title(&self) -> Option<String> {
        self.dom.borrow().buttons.first().and_then(|b| b.title.clone())
    }

    pub fn media(&self) -> Option<String> {
        self.dom.borrow().link_media.clone()
    }

    pub fn dark_classes(&self) -> (bool, bool) {
        let dom = self.dom.borrow();
        (dom.root_dark, dom.body_dark)
    }
}

impl ThemePage for FakePage {
    type Link = FakeLink;
    type Button = FakeButton;

    fn dark_link(&self, _config: &ThemeConfig) -> Option<FakeLink> {
        if self.dom.borrow().has_link {
            Some(FakeLink { dom: Rc::clone(&self.dom) })
        } else {
            None
        }
    }

    fn is_system_dark(&self) -> bool {
        self.dom.borrow().system_dark
    }

    fn set_dark_class(&self, enabled: bool) {
        let mut dom = self.dom.borrow_mut();
        dom.root_dark = enabled;
        dom.body_dark = enabled;
        dom.mutations += 1;
    }

    fn insert_toggle_button(&self, config: &ThemeConfig) -> Option<FakeButton> {
        let mut dom = self.dom.borrow_mut();
        if !dom.has_nav || dom.buttons.iter().any(|b| b.id == config.button_id) {
            return None;
        }
        let index = dom.buttons.len();
        dom.buttons.push(FakeButtonState {
            id: config.button_id.clone(),
            label: BUTTON_LABEL.to_string(),
            icon_id: config.icon_id.clone(),
            icon_glyph: ICON_GLYPH.to_string(),
            title: None,
        });
        dom.nav_children.insert(0, config.button_id.clone());
        dom.mutations += 1;
        Some(FakeButton { dom: Rc::clone(&self.dom), index, icon: Cell::new(true) })
    }
}

pub struct FakeLink {
    dom: Rc<RefCell<FakeDom>>,
}

impl StylesheetLink for FakeLink {
    fn set_media(&self, media: &str) {
        let mut dom = self.dom.borrow_mut();
        dom.link_media = Some(media.to_string());
        dom.mutations += 1;
    }
}

pub struct FakeButton {
    dom: Rc<RefCell<FakeDom>>,
    index: usize,
    pub icon: Cell<bool>,
}

impl ToggleButton for FakeButton {
    fn has_icon(&self) -> bool {
        self.icon.get()
    }

    fn set_title(&self, title: &str) {
        let mut dom = self.dom.borrow_mut();
        if let Some(state) = dom.buttons.get_mut(self.index) {
            state.title = Some(title.to_string());
        }
        dom.mutations += 1;
    }
}
