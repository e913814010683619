//! Status-change dialog on the incident list.
//!
//! Row triggers open `#modalCambioEstado` for their incident; the confirm
//! button submits the chosen status and, on success, patches the row badge in
//! place. Pages without the dialog skip the whole flow.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::IncidenciaId;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::notice;
use crate::consts::{
    BADGE_TRIGGER_SELECTOR, COMMENT_INPUT_ID, CONFIRM_BUTTON_ID, CSRF_INPUT_SELECTOR, MODAL_BODY_CLASS,
    OBS_ID_ATTR, STATUS_FORM_ID, STATUS_MODAL_ID, STATUS_SELECT_ID, STATUS_TRIGGER_SELECTOR,
};
use crate::net::api::{self, RequestError};
use crate::state::status_change::{Settlement, StatusDialog, StatusForm, Submission};
use crate::util::{bootstrap, dom};

type SharedDialog = Rc<RefCell<StatusDialog>>;

pub fn install() {
    let Some(modal_el) = dom::by_id::<Element>(STATUS_MODAL_ID) else {
        log::debug!("no #{STATUS_MODAL_ID} on page; status flow skipped");
        return;
    };
    let dialog: SharedDialog = Rc::new(RefCell::new(StatusDialog::default()));

    // Bootstrap opens the dialog for these through data attributes.
    for trigger in dom::query_all(STATUS_TRIGGER_SELECTOR) {
        let (dialog, el) = (Rc::clone(&dialog), trigger.clone());
        dom::listen(trigger.as_ref(), "click", move |_| {
            open_for(&dialog, &el);
        });
    }
    for badge in dom::query_all(BADGE_TRIGGER_SELECTOR) {
        let (dialog, modal_el, el) = (Rc::clone(&dialog), modal_el.clone(), badge.clone());
        dom::listen(badge.as_ref(), "click", move |_| {
            if open_for(&dialog, &el) {
                bootstrap::show_modal(&modal_el);
            }
        });
    }

    install_body_class(&modal_el, &dialog);

    match dom::by_id::<Element>(CONFIRM_BUTTON_ID) {
        Some(button) => {
            let (dialog, modal_el) = (Rc::clone(&dialog), modal_el.clone());
            dom::listen(button.as_ref(), "click", move |_| confirm(&dialog, &modal_el));
        }
        None => log::warn!("#{CONFIRM_BUTTON_ID} missing; status changes cannot be confirmed"),
    }
}

/// Record the trigger's incident as the dialog target.
fn open_for(dialog: &SharedDialog, trigger: &Element) -> bool {
    let raw = trigger.get_attribute(OBS_ID_ATTR).unwrap_or_default();
    let target = match IncidenciaId::parse(&raw) {
        Ok(target) => target,
        Err(e) => {
            log::warn!("status trigger ignored: {e}");
            return false;
        }
    };
    dialog.borrow_mut().open(target);
    true
}

/// `<body>` carries `dark-mode` while the dialog is visible.
fn install_body_class(modal_el: &Element, dialog: &SharedDialog) {
    dom::listen(modal_el.as_ref(), "show.bs.modal", |_| {
        if let Some(body) = dom::body() {
            if let Err(e) = body.class_list().add_1(MODAL_BODY_CLASS) {
                log::warn!("could not add body class: {e:?}");
            }
        }
    });
    let dialog = Rc::clone(dialog);
    dom::listen(modal_el.as_ref(), "hidden.bs.modal", move |_| {
        dialog.borrow_mut().close();
        if let Some(body) = dom::body() {
            if let Err(e) = body.class_list().remove_1(MODAL_BODY_CLASS) {
                log::warn!("could not remove body class: {e:?}");
            }
        }
    });
}

fn read_form() -> StatusForm {
    let estado = dom::by_id::<HtmlSelectElement>(STATUS_SELECT_ID).map(|s| s.value()).unwrap_or_default();
    let comentario = dom::by_id::<HtmlTextAreaElement>(COMMENT_INPUT_ID)
        .map(|t| t.value())
        .or_else(|| dom::by_id::<HtmlInputElement>(COMMENT_INPUT_ID).map(|i| i.value()))
        .unwrap_or_default();
    StatusForm { estado, comentario }
}

fn csrf_token() -> Option<String> {
    dom::query(CSRF_INPUT_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

fn confirm(dialog: &SharedDialog, modal_el: &Element) {
    let attempt = dialog.borrow_mut().confirm(&read_form());
    let submission = match attempt {
        Ok(submission) => submission,
        Err(e) => {
            if let Some(message) = e.user_message() {
                alert(message);
            }
            return;
        }
    };
    let Some(token) = csrf_token() else {
        finish(dialog, modal_el, &submission, Err(RequestError::MissingCsrfToken));
        return;
    };

    let (dialog, modal_el) = (Rc::clone(dialog), modal_el.clone());
    leptos::task::spawn_local(async move {
        let result = api::post_status_change(submission.target, &submission.request, &token).await;
        finish(&dialog, &modal_el, &submission, result);
    });
}

fn finish(
    dialog: &SharedDialog,
    modal_el: &Element,
    submission: &Submission,
    result: Result<contracts::StatusChangeOutcome, RequestError>,
) {
    if let Err(e) = &result {
        log::error!("status change for incident {} failed: {e}", submission.target);
    }
    let settlement = dialog.borrow_mut().settle(submission.target, result);
    apply(modal_el, settlement);
}

fn apply(modal_el: &Element, settlement: Settlement) {
    if let Some(patch) = settlement.badge {
        match dom::by_id::<Element>(&patch.element_id) {
            Some(badge) => {
                badge.set_text_content(Some(&patch.text));
                badge.set_class_name(&patch.class);
            }
            None => log::warn!("#{} not on page; badge not updated", patch.element_id),
        }
    }
    if settlement.close_dialog {
        bootstrap::hide_modal(modal_el);
        if let Some(form) = dom::by_id::<HtmlFormElement>(STATUS_FORM_ID) {
            form.reset();
        }
    }
    notice::show(settlement.notice);
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
}
