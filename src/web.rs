//! Browser bindings and the wasm entry point.
//!
//! Implements the [`crate::page`] and [`crate::store`] seams on top of
//! web-sys, then wires the button click and the `prefers-color-scheme`
//! change listener to a shared [`ThemeController`]. Listeners live for the
//! lifetime of the page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlLinkElement, MediaQueryList, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::{
    BUTTON_CLASS, BUTTON_LABEL, DARK_MODE_CLASS, DARK_SCHEME_QUERY, ICON_FONT_SIZE, ICON_GLYPH, ICON_LINE_HEIGHT,
    NAV_ITEM_CLASS,
};
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::page::{StylesheetLink, ThemePage, ToggleButton};
use crate::store::PreferenceStore;

type BrowserController = ThemeController<BrowserPage, BrowserStore>;

fn dom_err(err: JsValue) -> ThemeError {
    ThemeError::Dom(format!("{err:?}"))
}

fn storage_err(err: JsValue) -> ThemeError {
    ThemeError::StorageAccess(format!("{err:?}"))
}

fn log_dom_result<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        let err = dom_err(err);
        log::debug!("theme: {context}: {} {err}", err.error_code());
    }
}

// =============================================================
// Storage
// =============================================================

/// `localStorage`, or nothing when the browser refuses to provide it.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("theme: localStorage threw: {}", storage_err(err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(storage_err)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(key, value).map_err(storage_err)
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.storage()?.remove_item(key).map_err(storage_err)
    }
}

// =============================================================
// Page
// =============================================================

pub struct BrowserPage {
    window: Window,
    document: Document,
    dark_query: Option<MediaQueryList>,
}

impl BrowserPage {
    /// Bind to the current window, if there is one with a document.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let dark_query = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(query) => query,
            Err(err) => {
                log_dom_result::<()>("matchMedia", Err(err));
                None
            }
        };
        Some(Self { window, document, dark_query })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The live `prefers-color-scheme: dark` query, when supported.
    #[must_use]
    pub fn dark_query(&self) -> Option<&MediaQueryList> {
        self.dark_query.as_ref()
    }

    fn build_button(&self, config: &ThemeConfig) -> Result<Option<BrowserButton>, ThemeError> {
        let Some(nav) = self.document.query_selector(&config.nav_selector).map_err(dom_err)? else {
            return Ok(None);
        };
        if self.document.get_element_by_id(&config.button_id).is_some() {
            return Ok(None);
        }

        let item = self.document.create_element("li").map_err(dom_err)?;
        item.set_class_name(NAV_ITEM_CLASS);

        let button = self.create_html("button")?;
        button.set_attribute("type", "button").map_err(dom_err)?;
        button.set_class_name(BUTTON_CLASS);
        button.set_id(&config.button_id);
        button.set_attribute("aria-label", BUTTON_LABEL).map_err(dom_err)?;

        let icon = self.create_html("span")?;
        icon.set_id(&config.icon_id);
        icon.set_text_content(Some(ICON_GLYPH));
        let style = icon.style();
        style.set_property("font-size", ICON_FONT_SIZE).map_err(dom_err)?;
        style.set_property("line-height", ICON_LINE_HEIGHT).map_err(dom_err)?;
        icon.set_attribute("aria-hidden", "true").map_err(dom_err)?;

        button.append_child(&icon).map_err(dom_err)?;
        item.append_child(&button).map_err(dom_err)?;
        nav.insert_before(&item, nav.first_child().as_ref()).map_err(dom_err)?;

        Ok(Some(BrowserButton { element: button, document: self.document.clone(), icon_id: config.icon_id.clone() }))
    }

    fn create_html(&self, tag: &str) -> Result<HtmlElement, ThemeError> {
        self.document
            .create_element(tag)
            .map_err(dom_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|el| ThemeError::Dom(format!("<{}> is not an HtmlElement", el.tag_name())))
    }

    fn toggle_class(element: &Element, enabled: bool) {
        log_dom_result("toggle dark-mode class", element.class_list().toggle_with_force(DARK_MODE_CLASS, enabled));
    }
}

impl ThemePage for BrowserPage {
    type Link = BrowserLink;
    type Button = BrowserButton;

    fn dark_link(&self, config: &ThemeConfig) -> Option<BrowserLink> {
        let element = self.document.get_element_by_id(&config.dark_link_id)?;
        match element.dyn_into::<HtmlLinkElement>() {
            Ok(link) => Some(BrowserLink(link)),
            Err(other) => {
                log::debug!("theme: #{} is a <{}>, not a <link>", config.dark_link_id, other.tag_name());
                None
            }
        }
    }

    fn is_system_dark(&self) -> bool {
        self.dark_query.as_ref().map_or(false, MediaQueryList::matches)
    }

    fn set_dark_class(&self, enabled: bool) {
        if let Some(root) = self.document.document_element() {
            Self::toggle_class(&root, enabled);
        }
        if let Some(body) = self.document.body() {
            Self::toggle_class(&body, enabled);
        }
    }

    fn insert_toggle_button(&self, config: &ThemeConfig) -> Option<BrowserButton> {
        match self.build_button(config) {
            Ok(button) => button,
            Err(err) => {
                log::warn!("theme: {} building toggle: {err}", err.error_code());
                None
            }
        }
    }
}

pub struct BrowserLink(HtmlLinkElement);

impl StylesheetLink for BrowserLink {
    fn set_media(&self, media: &str) {
        self.0.set_media(media);
    }
}

pub struct BrowserButton {
    element: HtmlElement,
    document: Document,
    icon_id: String,
}

impl ToggleButton for BrowserButton {
    fn has_icon(&self) -> bool {
        self.document.get_element_by_id(&self.icon_id).is_some()
    }

    fn set_title(&self, title: &str) {
        self.element.set_title(title);
    }
}

// =============================================================
// Entry point
// =============================================================

/// Start the theme toggle.
///
/// `config_json` optionally overrides [`ThemeConfig`] fields. A malformed
/// override is logged and the defaults are used. Runs immediately when the
/// document has been parsed, otherwise on `DOMContentLoaded`.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) {
    init_runtime();

    let config = match ThemeConfig::from_optional_json(config_json.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("theme: {} {err}; using defaults", err.error_code());
            ThemeConfig::default()
        }
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || mount(config));
        log_dom_result(
            "listen for DOMContentLoaded",
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()),
        );
    } else {
        mount(config);
    }
}

fn init_runtime() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("theme: logger already installed: {err}");
    }
}

fn mount(config: ThemeConfig) {
    let Some(page) = BrowserPage::current() else {
        return;
    };
    let store = BrowserStore::new(page.window());
    let Some(controller) = ThemeController::init(page, store, config) else {
        return;
    };

    let button = controller.button().map(|b| b.element.clone());
    let dark_query = controller.page().dark_query().cloned();
    let controller = Rc::new(RefCell::new(controller));

    if let Some(button) = button {
        wire_click(&button, Rc::clone(&controller));
    }
    if let Some(query) = dark_query {
        wire_system_change(&query, controller);
    }
}

fn wire_click(button: &HtmlElement, controller: Rc<RefCell<BrowserController>>) {
    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        controller.borrow_mut().handle_click();
    }) as Box<dyn FnMut(_)>);
    log_dom_result(
        "listen for toggle click",
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
    );
    on_click.forget();
}

fn wire_system_change(query: &MediaQueryList, controller: Rc<RefCell<BrowserController>>) {
    let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        controller.borrow().handle_system_change();
    }) as Box<dyn FnMut(_)>);
    log_dom_result(
        "listen for color-scheme change",
        query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()),
    );
    on_change.forget();
}
