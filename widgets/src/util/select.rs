//! Reading and rewriting `<select>` controls.

use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::state::cascade::SelectView;

/// Replace all options of `select` with `view` and set its disabled flag.
pub fn apply_view(select: &HtmlSelectElement, view: &SelectView) {
    select.set_length(0);
    for option in &view.options {
        match HtmlOptionElement::new_with_text_and_value(&option.label, &option.value) {
            Ok(el) => {
                if let Err(e) = select.append_child(&el) {
                    log::warn!("could not append option to #{}: {e:?}", select.id());
                }
            }
            Err(e) => log::warn!("could not create option {:?}: {e:?}", option.value),
        }
    }
    select.set_disabled(view.disabled);
}

/// Display text of the selected option, if any.
#[allow(clippy::cast_sign_loss)]
pub fn selected_text(select: &HtmlSelectElement) -> Option<String> {
    let index = select.selected_index();
    if index < 0 {
        return None;
    }
    select.item(index as u32).and_then(|el| el.text_content())
}
