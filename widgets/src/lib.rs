//! Browser widgets for the Techo Chile incident-management pages.
//!
//! The server renders every page; this crate, compiled to WebAssembly with
//! the `csr` feature, attaches behavior on load:
//!
//! | Widget | Module |
//! |--------|--------|
//! | Status change dialog and badge update | [`state::status_change`], `pages::incidencias` |
//! | Cascading region/comuna and proyecto/vivienda/recinto selects | [`state::cascade`], `pages::cascade` |
//! | Light/dark theme toggle | [`state::theme`], `pages::theme` |
//! | Role-dependent `constructora` field | [`state::visibility`], `pages::usuario_form` |
//! | Status doughnut, tooltips, flash alerts, metric counters | [`state::metrics`], `pages::dashboard` |
//!
//! Without `csr` only the pure state machines and HTTP error types build,
//! which is what the native unit tests exercise.

pub mod consts;
pub mod net;
pub mod state;

#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
pub mod pages;
#[cfg(feature = "csr")]
pub mod util;

/// Install every widget whose elements are on the page.
#[cfg(feature = "csr")]
pub fn install_all() {
    pages::theme::install();
    for group in &consts::CASCADE_GROUPS {
        pages::cascade::install(group);
    }
    pages::usuario_form::install(consts::CONSTRUCTORA_FIELD);
    pages::incidencias::install();
    pages::dashboard::install_chart();
    pages::dashboard::install_tooltips();
    pages::dashboard::install_flash_alerts();
    log::info!("techo widgets installed");
}

/// WASM entry point: logging, panic hook, then widgets once the DOM is ready.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    util::dom::on_ready(install_all);
}
