//! Cascading-select lookup routes.
//!
//! A missing or non-numeric parent id yields an empty list, never an error.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use axum::Json;
use axum::extract::{Query, State};
use contracts::lookup::{ComunasResponse, RecintosResponse, ViviendasResponse};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    pub region_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProyectoQuery {
    pub proyecto_id: Option<String>,
}

fn parse_parent(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// `GET /ajax/comunas/?region_id=`
pub async fn comunas(State(state): State<AppState>, Query(q): Query<RegionQuery>) -> Json<ComunasResponse> {
    let comunas = match parse_parent(q.region_id.as_deref()) {
        Some(region_id) => state.fixtures.read().await.comunas_for(region_id),
        None => Vec::new(),
    };
    tracing::debug!(region_id = ?q.region_id, count = comunas.len(), "comunas lookup");
    Json(ComunasResponse { comunas })
}

/// `GET /incidencias/ajax/viviendas/?proyecto_id=`
pub async fn viviendas(State(state): State<AppState>, Query(q): Query<ProyectoQuery>) -> Json<ViviendasResponse> {
    let viviendas = match parse_parent(q.proyecto_id.as_deref()) {
        Some(proyecto_id) => state.fixtures.read().await.viviendas_for(proyecto_id),
        None => Vec::new(),
    };
    tracing::debug!(proyecto_id = ?q.proyecto_id, count = viviendas.len(), "viviendas lookup");
    Json(ViviendasResponse { viviendas })
}

/// `GET /incidencias/ajax/recintos/?proyecto_id=`
pub async fn recintos(State(state): State<AppState>, Query(q): Query<ProyectoQuery>) -> Json<RecintosResponse> {
    let recintos = match parse_parent(q.proyecto_id.as_deref()) {
        Some(proyecto_id) => state.fixtures.read().await.recintos_for(proyecto_id),
        None => Vec::new(),
    };
    tracing::debug!(proyecto_id = ?q.proyecto_id, count = recintos.len(), "recintos lookup");
    Json(RecintosResponse { recintos })
}
