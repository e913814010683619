//! Networking for the lookup and status-change endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls; request and response shapes come from the
//! `contracts` crate shared with the harness.

pub mod api;
