//! Bootstrap 5 component bindings.
//!
//! The page loads Bootstrap's bundle, which exposes `bootstrap.Modal`,
//! `bootstrap.Tooltip` and `bootstrap.Alert`. `getOrCreateInstance` reuses
//! any instance Bootstrap already created from markup.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn modal_instance(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, static_method_of = Tooltip, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn tooltip_instance(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(catch, static_method_of = Alert, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn alert_instance(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method)]
    fn close(this: &Alert);
}

pub fn show_modal(element: &Element) {
    match modal_instance(element) {
        Ok(modal) => modal.show(),
        Err(e) => log::error!("bootstrap.Modal unavailable: {e:?}"),
    }
}

pub fn hide_modal(element: &Element) {
    match modal_instance(element) {
        Ok(modal) => modal.hide(),
        Err(e) => log::error!("bootstrap.Modal unavailable: {e:?}"),
    }
}

/// Attach a tooltip to `element`; its text comes from the `title` attribute.
pub fn enable_tooltip(element: &Element) {
    if let Err(e) = tooltip_instance(element) {
        log::warn!("bootstrap.Tooltip unavailable: {e:?}");
    }
}

/// Fade out and remove an alert. Falls back to a plain removal when
/// Bootstrap is not on the page.
pub fn close_alert(element: &Element) {
    match alert_instance(element) {
        Ok(alert) => alert.close(),
        Err(e) => {
            log::warn!("bootstrap.Alert unavailable, removing alert directly: {e:?}");
            element.remove();
        }
    }
}
