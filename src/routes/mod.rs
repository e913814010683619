//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the four endpoints the widgets call at the paths the real server
//! uses, and serves the demo page plus the built widget bundle from the
//! static directory for everything else.

pub mod incidencias;
pub mod lookup;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use contracts::endpoints::{COMUNAS_PATH, RECINTOS_PATH, VIVIENDAS_PATH};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route(COMUNAS_PATH, get(lookup::comunas))
        .route(VIVIENDAS_PATH, get(lookup::viviendas))
        .route(RECINTOS_PATH, get(lookup::recintos))
        .route("/incidencias/{id}/cambiar-estado/", post(incidencias::cambiar_estado))
        .route("/healthz", get(healthz))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
