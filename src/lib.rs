//! Dark/light theme toggle for the admin interface.
//!
//! This crate is compiled to WebAssembly and loaded by the admin pages. It
//! reads the stored theme preference, switches the dark stylesheet's `media`
//! attribute, injects a toggle button into the navbar, and follows the
//! operating system's color scheme while the user hasn't picked one.
//!
//! Everything except [`web`] is plain Rust so the controller can be tested
//! natively against an in-memory page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`] and its [`controller::ThemeState`] |
//! | [`preference`] | The tri-state preference and effective-mode derivation |
//! | [`store`] | Preference persistence behind [`store::PreferenceStore`] |
//! | [`page`] | DOM seam traits implemented by the browser and by tests |
//! | [`config`] | Element ids, selector, and storage key as typed config |
//! | [`error`] | [`error::ThemeError`] |
//! | [`consts`] | Default identifiers, media strings, and tooltip text |
//! | `web` | web-sys bindings and the wasm entry point (feature `browser`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod page;
pub mod preference;
pub mod store;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod testing;
