//! Role-dependent field visibility on the user forms.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::state::visibility::{ConditionalField, GroupLocator};
use crate::util::{dom, select};

fn locate_group(field_el: &Element, locators: &[GroupLocator]) -> Option<HtmlElement> {
    locators
        .iter()
        .find_map(|locator| match *locator {
            GroupLocator::FieldAncestor { selector } => dom::closest(field_el, selector),
            GroupLocator::Row { row, closest } => dom::query(row).and_then(|el| dom::closest(&el, closest)),
        })
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn clear_value(field_el: &Element) {
    if let Some(select) = field_el.dyn_ref::<HtmlSelectElement>() {
        select.set_value("");
    } else if let Some(input) = field_el.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn apply(controller: &HtmlSelectElement, field_el: &Element, group: &HtmlElement, field: &ConditionalField) {
    let visibility = field.rule.evaluate(select::selected_text(controller).as_deref());
    dom::set_style(group, "display", visibility.display());
    if visibility.clears_field() {
        clear_value(field_el);
    }
    log::debug!("#{} group {visibility:?}", field.field_id);
}

/// Evaluate `field` now and on every change of its controller.
pub fn install(field: ConditionalField) {
    let Some(controller) = dom::by_id::<HtmlSelectElement>(field.controller_id) else {
        return;
    };
    let Some(field_el) = dom::document().and_then(|d| d.get_element_by_id(field.field_id)) else {
        log::warn!("#{} present without #{}; visibility rule skipped", field.controller_id, field.field_id);
        return;
    };
    let Some(group) = locate_group(&field_el, field.locators) else {
        log::warn!("no layout group found for #{}; visibility rule skipped", field.field_id);
        return;
    };

    apply(&controller, &field_el, &group, &field);
    let source = controller.clone();
    dom::listen(controller.as_ref(), "change", move |_| {
        apply(&source, &field_el, &group, &field);
    });
}
