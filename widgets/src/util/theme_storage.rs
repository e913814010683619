//! Theme persistence and application.
//!
//! Reads the preference from `localStorage["theme"]` and mirrors it onto the
//! `data-theme` attribute of `<html>`. Storage failures (private mode, quota)
//! are logged and otherwise ignored.

use crate::consts::{THEME_ATTR, THEME_STORAGE_KEY};
use crate::state::theme::Theme;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored preference; light when nothing usable is stored.
pub fn read_preference() -> Theme {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::parse(stored.as_deref())
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    let Some(el) = super::dom::document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(e) = el.set_attribute(THEME_ATTR, theme.as_str()) {
        log::warn!("could not set {THEME_ATTR}: {e:?}");
    }
}

pub fn persist(theme: Theme) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable; theme not saved");
        return;
    };
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("could not save theme: {e:?}");
    }
}
