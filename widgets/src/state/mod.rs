//! Pure state for each widget flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches the DOM. Page modules read inputs from the document,
//! drive these machines, and write the resulting views back, which keeps the
//! decision logic testable on native targets.

pub mod cascade;
pub mod metrics;
pub mod notice;
pub mod status_change;
pub mod theme;
pub mod visibility;
