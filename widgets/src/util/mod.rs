//! Browser helpers shared across the page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys and Bootstrap interop so page wiring reads
//! as a sequence of widget steps.

pub mod bootstrap;
pub mod dom;
pub mod select;
pub mod theme_storage;
