//! Light/dark toggle.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use web_sys::Element;

use crate::consts::{THEME_TOGGLE_ID, THEME_TRANSITION, THEME_TRANSITION_MS};
use crate::state::theme::Theme;
use crate::util::{dom, theme_storage};

fn update_indicator(toggle: Option<&Element>, theme: Theme) {
    let Some(toggle) = toggle else {
        return;
    };
    toggle.set_text_content(Some(theme.icon()));
    if let Err(e) = toggle.set_attribute("title", theme.toggle_title()) {
        log::warn!("could not set toggle title: {e:?}");
    }
}

/// Briefly animate the color change on `<body>`.
fn flash_transition() {
    let Some(body) = dom::body() else {
        return;
    };
    dom::set_style(&body, "transition", THEME_TRANSITION);
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(THEME_TRANSITION_MS))).await;
        dom::set_style(&body, "transition", "");
    });
}

/// Apply the stored theme and wire `#theme-toggle` if present.
pub fn install() {
    let theme = Rc::new(Cell::new(theme_storage::read_preference()));
    theme_storage::apply(theme.get());

    let toggle = dom::by_id::<Element>(THEME_TOGGLE_ID);
    update_indicator(toggle.as_ref(), theme.get());
    let Some(toggle) = toggle else {
        log::debug!("no #{THEME_TOGGLE_ID}; theme applied without toggle");
        return;
    };

    let button = toggle.clone();
    dom::listen(toggle.as_ref(), "click", move |_| {
        let next = theme.get().toggled();
        theme.set(next);
        theme_storage::apply(next);
        theme_storage::persist(next);
        update_indicator(Some(&button), next);
        flash_transition();
        log::debug!("theme switched to {}", next.as_str());
    });
}
