//! Status-change request and response.
//!
//! DESIGN
//! ======
//! The server answers with a loosely shaped JSON object. Callers go through
//! [`StatusChangeResponse::into_outcome`], which rejects a success answer that
//! lacks a usable `nuevo_estado` instead of letting the widget write an empty
//! badge.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Form body of `POST /incidencias/{id}/cambiar-estado/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// Identifier of the target `EstadoObservacion`.
    pub estado: String,
    /// Free-text follow-up comment, possibly empty.
    #[serde(default)]
    pub comentario: String,
}

impl StatusChangeRequest {
    #[must_use]
    pub fn new(estado: impl Into<String>, comentario: impl Into<String>) -> Self {
        Self { estado: estado.into(), comentario: comentario.into() }
    }

    /// `application/x-www-form-urlencoded` encoding of the request.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("estado", &self.estado)
            .append_pair("comentario", &self.comentario)
            .finish()
    }
}

/// The status an incident moved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuevoEstado {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name, written as the badge text.
    pub nombre: String,
    /// Style class for the badge, e.g. `badge-cerrada`.
    pub badge_class: String,
}

impl NuevoEstado {
    /// Full `class` attribute for the status badge.
    #[must_use]
    pub fn badge_class_attr(&self) -> String {
        format!("badge {} estado-badge", self.badge_class)
    }
}

/// JSON answer of the status-change endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuevo_estado: Option<NuevoEstado>,
}

impl StatusChangeResponse {
    #[must_use]
    pub fn applied(message: impl Into<String>, nuevo_estado: NuevoEstado) -> Self {
        Self { success: true, message: message.into(), nuevo_estado: Some(nuevo_estado) }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), nuevo_estado: None }
    }

    /// Parse and validate a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] if the body is not JSON of this shape or a
    /// success answer carries no usable `nuevo_estado`.
    pub fn parse(body: &str) -> Result<StatusChangeOutcome, ContractError> {
        let resp: Self = serde_json::from_str(body)?;
        resp.into_outcome()
    }

    /// Validate into an outcome the widget can apply without further checks.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingField`] or [`ContractError::EmptyField`]
    /// for a success answer whose `nuevo_estado` is absent or incomplete.
    pub fn into_outcome(self) -> Result<StatusChangeOutcome, ContractError> {
        if !self.success {
            return Ok(StatusChangeOutcome::Rejected { message: self.message });
        }
        let estado = self.nuevo_estado.ok_or(ContractError::MissingField("nuevo_estado"))?;
        if estado.nombre.trim().is_empty() {
            return Err(ContractError::EmptyField("nuevo_estado.nombre"));
        }
        if estado.badge_class.trim().is_empty() {
            return Err(ContractError::EmptyField("nuevo_estado.badge_class"));
        }
        Ok(StatusChangeOutcome::Applied { message: self.message, estado })
    }
}

/// Validated result of a status change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusChangeOutcome {
    /// The server changed the status.
    Applied { message: String, estado: NuevoEstado },
    /// The server refused; `message` explains why.
    Rejected { message: String },
}
