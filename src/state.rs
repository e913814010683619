//! Shared harness state.
//!
//! `AppState` is injected into handlers via the `State` extractor. Fixtures
//! are mutable so status changes persist for the life of the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::fixtures::Fixtures;

#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<RwLock<Fixtures>>,
    /// Expected `X-CSRFToken` value.
    pub csrf_token: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(fixtures: Fixtures, csrf_token: &str) -> Self {
        Self { fixtures: Arc::new(RwLock::new(fixtures)), csrf_token: Arc::from(csrf_token) }
    }
}
