//! Cascading lookups between a parent `<select>` and its dependents.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlSelectElement;

use crate::net::api;
use crate::state::cascade::{CascadeGroup, CascadeSpec, CascadeState};
use crate::util::{dom, select};

/// One dependent control with its own sequence of lookups.
#[derive(Clone)]
struct Dependent {
    spec: CascadeSpec,
    select: HtmlSelectElement,
    state: Rc<RefCell<CascadeState>>,
}

impl Dependent {
    fn render(&self) {
        if let Some(view) = self.state.borrow().view(&self.spec.labels) {
            select::apply_view(&self.select, &view);
        }
    }

    fn parent_changed(&self, parent_value: &str) {
        let ticket = self.state.borrow_mut().parent_changed(parent_value);
        self.render();
        let Some(ticket) = ticket else {
            return;
        };
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_lookup(this.spec.lookup, &ticket.parent_id).await;
            if let Err(e) = &result {
                log::error!("lookup for #{} failed: {e}", this.spec.dependent_id);
            }
            if this.state.borrow_mut().resolve(&ticket, result) {
                this.render();
            } else {
                log::debug!("stale lookup for #{} dropped (seq {})", this.spec.dependent_id, ticket.seq);
            }
        });
    }
}

/// Wire `group` if its controls are on the page.
pub fn install(group: &CascadeGroup) {
    let Some(parent) = dom::by_id::<HtmlSelectElement>(group.parent_id) else {
        return;
    };
    let dependents: Vec<Dependent> = group
        .dependents
        .iter()
        .filter_map(|spec| {
            let select = dom::by_id::<HtmlSelectElement>(spec.dependent_id)?;
            Some(Dependent { spec: *spec, select, state: Rc::default() })
        })
        .collect();
    if dependents.is_empty() || (group.require_all && dependents.len() < group.dependents.len()) {
        log::warn!("#{} present without its dependents; cascade skipped", group.parent_id);
        return;
    }

    let source = parent.clone();
    dom::listen(parent.as_ref(), "change", move |_| {
        let value = source.value();
        for dependent in &dependents {
            dependent.parent_changed(&value);
        }
    });
}
