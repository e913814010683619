//! Status-change route.
//!
//! Mirrors the production view: the CSRF header is checked first, then the
//! incident must exist, then the estado is resolved. Only XHR callers get
//! JSON; a plain form post is redirected back to the demo page.

#[cfg(test)]
#[path = "incidencias_test.rs"]
mod incidencias_test;

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use contracts::endpoints::{CSRF_HEADER, REQUESTED_WITH_HEADER, XHR_MARKER};
use contracts::{StatusChangeRequest, StatusChangeResponse};

use crate::fixtures::{Fixtures, StatusChangeError};
use crate::state::AppState;

pub const INVALID_ESTADO_MESSAGE: &str = "Estado no válido";

fn header_is(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers.get(name).and_then(|v| v.to_str().ok()) == Some(expected)
}

/// Apply `req` to incident `id` and build the JSON answer.
///
/// # Errors
///
/// Returns `404` when the incident does not exist.
pub fn apply_status_change(
    fixtures: &mut Fixtures,
    id: u64,
    req: &StatusChangeRequest,
) -> Result<StatusChangeResponse, StatusCode> {
    match fixtures.change_status(id, &req.estado) {
        Ok(nuevo) => {
            tracing::info!(incidencia = id, estado = %nuevo.nombre, comentario = %req.comentario, "status changed");
            let message = format!("Estado cambiado a \"{}\"", nuevo.nombre);
            Ok(StatusChangeResponse::applied(message, nuevo))
        }
        Err(StatusChangeError::UnknownEstado(raw)) => {
            tracing::warn!(incidencia = id, estado = %raw, "unknown estado");
            Ok(StatusChangeResponse::rejected(INVALID_ESTADO_MESSAGE))
        }
        Err(StatusChangeError::UnknownIncidencia(_)) => Err(StatusCode::NOT_FOUND),
    }
}

/// `POST /incidencias/{id}/cambiar-estado/`
pub async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Form(req): Form<StatusChangeRequest>,
) -> Response {
    if !header_is(&headers, CSRF_HEADER, &state.csrf_token) {
        tracing::warn!(incidencia = id, "csrf token missing or wrong");
        return StatusCode::FORBIDDEN.into_response();
    }
    let body = match apply_status_change(&mut *state.fixtures.write().await, id, &req) {
        Ok(body) => body,
        Err(status) => return status.into_response(),
    };
    if header_is(&headers, REQUESTED_WITH_HEADER, XHR_MARKER) {
        Json(body).into_response()
    } else {
        Redirect::to("/").into_response()
    }
}
