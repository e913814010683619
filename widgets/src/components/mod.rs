//! Leptos components mounted into server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pages are rendered by the server; components here are mounted on
//! demand for transient UI such as notices.

pub mod notice;
