//! In-memory records backing the harness endpoints.
//!
//! DESIGN
//! ======
//! Rows mirror the server tables the widgets depend on, reduced to the
//! columns the lookups filter on. Lookup methods return `contracts` DTOs
//! directly so the harness and the widgets share one wire schema.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use contracts::NuevoEstado;
use contracts::lookup::{Comuna, Recinto, Vivienda};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("could not read fixtures: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatusChangeError {
    #[error("incidencia {0} not found")]
    UnknownIncidencia(u64),
    #[error("estado {0:?} not found")]
    UnknownEstado(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComunaRow {
    pub id: i64,
    pub region_id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViviendaRow {
    pub id: i64,
    pub proyecto_id: i64,
    pub codigo: String,
    pub tipologia_id: i64,
    #[serde(default = "active_by_default")]
    pub activa: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecintoRow {
    pub id: i64,
    pub tipologia_id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoRow {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub comunas: Vec<ComunaRow>,
    #[serde(default)]
    pub viviendas: Vec<ViviendaRow>,
    #[serde(default)]
    pub recintos: Vec<RecintoRow>,
    #[serde(default)]
    pub estados: Vec<EstadoRow>,
    /// Incident id to current estado id.
    #[serde(default)]
    pub incidencias: BTreeMap<u64, i64>,
}

/// Badge style for an estado name.
#[must_use]
pub fn badge_class(nombre: &str) -> &'static str {
    match nombre {
        "Abierta" => "badge-abierta",
        "En Proceso" => "badge-proceso",
        "Cerrada" => "badge-cerrada",
        "Rechazada" => "badge-vencida",
        _ => "bg-secondary",
    }
}

impl Fixtures {
    /// Small data set matching the demo page.
    #[must_use]
    pub fn sample() -> Self {
        let comuna = |id, region_id, nombre: &str| ComunaRow { id, region_id, nombre: nombre.to_owned() };
        let vivienda = |id, proyecto_id, codigo: &str, tipologia_id, activa| ViviendaRow {
            id,
            proyecto_id,
            codigo: codigo.to_owned(),
            tipologia_id,
            activa,
        };
        let recinto = |id, tipologia_id, nombre: &str| RecintoRow { id, tipologia_id, nombre: nombre.to_owned() };
        let estado = |id, nombre: &str| EstadoRow { id, nombre: nombre.to_owned() };

        Self {
            comunas: vec![
                comuna(1, 13, "Santiago"),
                comuna(2, 13, "Providencia"),
                comuna(3, 13, "Maipú"),
                comuna(4, 5, "Valparaíso"),
                comuna(5, 5, "Viña del Mar"),
            ],
            viviendas: vec![
                vivienda(10, 1, "A-02", 1, true),
                vivienda(11, 1, "A-01", 1, true),
                vivienda(12, 1, "B-01", 2, true),
                vivienda(13, 1, "Z-99", 3, false),
                vivienda(20, 2, "C-01", 2, true),
            ],
            recintos: vec![
                recinto(100, 1, "Baño"),
                recinto(101, 1, "Cocina"),
                recinto(102, 2, "Dormitorio"),
                recinto(103, 3, "Logia"),
            ],
            estados: vec![estado(1, "Abierta"), estado(2, "En Proceso"), estado(3, "Cerrada"), estado(4, "Rechazada")],
            incidencias: BTreeMap::from([(41, 1), (42, 2), (43, 1)]),
        }
    }

    /// Load fixtures from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    #[must_use]
    pub fn comunas_for(&self, region_id: i64) -> Vec<Comuna> {
        self.comunas
            .iter()
            .filter(|c| c.region_id == region_id)
            .map(|c| Comuna { id: c.id, nombre: c.nombre.clone() })
            .collect()
    }

    /// Active dwellings of a project, ordered by code.
    #[must_use]
    pub fn viviendas_for(&self, proyecto_id: i64) -> Vec<Vivienda> {
        let mut rows: Vec<&ViviendaRow> =
            self.viviendas.iter().filter(|v| v.proyecto_id == proyecto_id && v.activa).collect();
        rows.sort_by(|a, b| a.codigo.cmp(&b.codigo));
        rows.into_iter().map(|v| Vivienda { id: v.id, codigo: v.codigo.clone() }).collect()
    }

    /// Rooms of every typology used by the project's dwellings, active or not.
    #[must_use]
    pub fn recintos_for(&self, proyecto_id: i64) -> Vec<Recinto> {
        let tipologias: BTreeSet<i64> =
            self.viviendas.iter().filter(|v| v.proyecto_id == proyecto_id).map(|v| v.tipologia_id).collect();
        self.recintos
            .iter()
            .filter(|r| tipologias.contains(&r.tipologia_id))
            .map(|r| Recinto { id: r.id, nombre: r.nombre.clone() })
            .collect()
    }

    #[must_use]
    pub fn has_incidencia(&self, id: u64) -> bool {
        self.incidencias.contains_key(&id)
    }

    /// Move incident `id` to the estado whose id is `estado`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusChangeError`] for an unknown incident or estado.
    pub fn change_status(&mut self, id: u64, estado: &str) -> Result<NuevoEstado, StatusChangeError> {
        if !self.has_incidencia(id) {
            return Err(StatusChangeError::UnknownIncidencia(id));
        }
        let row = estado
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|estado_id| self.estados.iter().find(|e| e.id == estado_id))
            .ok_or_else(|| StatusChangeError::UnknownEstado(estado.to_owned()))?;
        let nuevo = NuevoEstado { id: Some(row.id), nombre: row.nombre.clone(), badge_class: badge_class(&row.nombre).to_owned() };
        self.incidencias.insert(id, row.id);
        Ok(nuevo)
    }
}
