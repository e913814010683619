//! Dependent-select state for the cascading lookups.
//!
//! DESIGN
//! ======
//! Each dependent control owns one [`CascadeState`]. A parent change bumps a
//! sequence number and hands back a [`LookupTicket`]; only a response that
//! presents the latest ticket is applied. Any older response is dropped, so
//! the control always reflects the most recent parent selection no matter the
//! order in which lookups complete.

#[cfg(test)]
#[path = "cascade_test.rs"]
mod cascade_test;

use contracts::{Lookup, LookupOption};

/// Placeholder texts shown in a dependent control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeLabels {
    pub loading: &'static str,
    pub placeholder: &'static str,
    pub error: &'static str,
}

/// A dependent control and where its options come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeSpec {
    pub dependent_id: &'static str,
    pub lookup: Lookup,
    pub labels: CascadeLabels,
}

/// A parent control and the dependents refreshed when it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeGroup {
    pub parent_id: &'static str,
    pub dependents: &'static [CascadeSpec],
    /// Skip wiring unless every dependent is present on the page.
    pub require_all: bool,
}

/// Lifecycle of a dependent control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CascadePhase {
    /// Untouched; the server-rendered options are still showing.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The parent was cleared; nothing to choose from.
    Cleared,
    /// Options from the latest lookup.
    Populated(Vec<LookupOption>),
    /// The latest lookup failed.
    Errored,
}

/// Proof that a lookup was issued for a given parent value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub parent_id: String,
}

/// What the `<select>` should look like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectView {
    pub disabled: bool,
    /// First entry is always the empty-valued placeholder.
    pub options: Vec<LookupOption>,
}

impl SelectView {
    fn placeholder(text: &str, disabled: bool) -> Self {
        Self { disabled, options: vec![LookupOption::new("", text)] }
    }
}

/// State machine for one dependent control.
#[derive(Clone, Debug, Default)]
pub struct CascadeState {
    seq: u64,
    phase: CascadePhase,
}

impl CascadeState {
    #[must_use]
    pub fn phase(&self) -> &CascadePhase {
        &self.phase
    }

    /// Sequence number of the most recent parent change.
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// React to a new parent value.
    ///
    /// Returns a ticket when a lookup must be issued. An empty (or blank)
    /// value clears the control without a request; it still invalidates any
    /// lookup already in flight.
    pub fn parent_changed(&mut self, parent_value: &str) -> Option<LookupTicket> {
        self.seq += 1;
        let parent_id = parent_value.trim();
        if parent_id.is_empty() {
            self.phase = CascadePhase::Cleared;
            return None;
        }
        self.phase = CascadePhase::Loading;
        Some(LookupTicket { seq: self.seq, parent_id: parent_id.to_owned() })
    }

    /// Apply a settled lookup. Returns `false` if the ticket was superseded
    /// and the result was ignored.
    pub fn resolve<E>(&mut self, ticket: &LookupTicket, result: Result<Vec<LookupOption>, E>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.phase = match result {
            Ok(options) => CascadePhase::Populated(options),
            Err(_) => CascadePhase::Errored,
        };
        true
    }

    /// Render the current phase, or `None` while idle.
    #[must_use]
    pub fn view(&self, labels: &CascadeLabels) -> Option<SelectView> {
        let view = match &self.phase {
            CascadePhase::Idle => return None,
            CascadePhase::Loading => SelectView::placeholder(labels.loading, true),
            CascadePhase::Cleared => SelectView::placeholder(labels.placeholder, false),
            CascadePhase::Errored => SelectView::placeholder(labels.error, false),
            CascadePhase::Populated(items) => {
                let mut view = SelectView::placeholder(labels.placeholder, false);
                view.options.extend(items.iter().cloned());
                view
            }
        };
        Some(view)
    }
}
