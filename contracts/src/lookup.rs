//! Lookup payloads for the cascading selects.
//!
//! DESIGN
//! ======
//! Each endpoint returns a single-key envelope (`{"comunas": [...]}`) of
//! `{id, label}` rows. [`Lookup`] names the endpoint and turns a raw body into
//! the `value`/`label` pairs a `<select>` needs, so the widget never touches
//! untyped JSON.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ContractError;
use crate::endpoints::{COMUNAS_PATH, RECINTOS_PATH, VIVIENDAS_PATH, with_query};

/// A commune under a region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comuna {
    pub id: i64,
    pub nombre: String,
}

/// A dwelling unit within a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vivienda {
    pub id: i64,
    /// Dwelling code; some fixtures send it as a bare number.
    #[serde(deserialize_with = "deserialize_code")]
    pub codigo: String,
}

/// A room or space within a dwelling typology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recinto {
    pub id: i64,
    pub nombre: String,
}

/// `GET /ajax/comunas/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComunasResponse {
    pub comunas: Vec<Comuna>,
}

/// `GET /incidencias/ajax/viviendas/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViviendasResponse {
    pub viviendas: Vec<Vivienda>,
}

/// `GET /incidencias/ajax/recintos/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecintosResponse {
    pub recintos: Vec<Recinto>,
}

/// One `<option>` worth of lookup data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

impl LookupOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

impl From<&Comuna> for LookupOption {
    fn from(c: &Comuna) -> Self {
        Self::new(c.id.to_string(), c.nombre.clone())
    }
}

impl From<&Vivienda> for LookupOption {
    fn from(v: &Vivienda) -> Self {
        Self::new(v.id.to_string(), format!("Vivienda {}", v.codigo))
    }
}

impl From<&Recinto> for LookupOption {
    fn from(r: &Recinto) -> Self {
        Self::new(r.id.to_string(), r.nombre.clone())
    }
}

/// The three lookup endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Comunas of a region, keyed by `region_id`.
    Comunas,
    /// Viviendas of a project, keyed by `proyecto_id`.
    Viviendas,
    /// Recintos of a project, keyed by `proyecto_id`.
    Recintos,
}

impl Lookup {
    /// Query parameter carrying the parent identifier.
    #[must_use]
    pub fn param(self) -> &'static str {
        match self {
            Self::Comunas => "region_id",
            Self::Viviendas | Self::Recintos => "proyecto_id",
        }
    }

    /// Endpoint path without query.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Comunas => COMUNAS_PATH,
            Self::Viviendas => VIVIENDAS_PATH,
            Self::Recintos => RECINTOS_PATH,
        }
    }

    /// Full request URL for `parent_id`.
    #[must_use]
    pub fn url(self, parent_id: &str) -> String {
        with_query(self.path(), self.param(), parent_id)
    }

    /// Decode a response body into select options, preserving server order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Json`] when the body does not match the
    /// endpoint's envelope.
    pub fn parse_options(self, body: &str) -> Result<Vec<LookupOption>, ContractError> {
        let options = match self {
            Self::Comunas => {
                let resp: ComunasResponse = serde_json::from_str(body)?;
                resp.comunas.iter().map(LookupOption::from).collect()
            }
            Self::Viviendas => {
                let resp: ViviendasResponse = serde_json::from_str(body)?;
                resp.viviendas.iter().map(LookupOption::from).collect()
            }
            Self::Recintos => {
                let resp: RecintosResponse = serde_json::from_str(body)?;
                resp.recintos.iter().map(LookupOption::from).collect()
            }
        };
        Ok(options)
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number code, got {other}"))),
    }
}
