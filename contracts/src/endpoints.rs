//! Endpoint paths and request headers.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Region → comuna lookup.
pub const COMUNAS_PATH: &str = "/ajax/comunas/";
/// Project → vivienda lookup.
pub const VIVIENDAS_PATH: &str = "/incidencias/ajax/viviendas/";
/// Project → recinto lookup.
pub const RECINTOS_PATH: &str = "/incidencias/ajax/recintos/";

/// Header carrying the CSRF token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Header marking a request as programmatic.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
/// Value of [`REQUESTED_WITH_HEADER`].
pub const XHR_MARKER: &str = "XMLHttpRequest";
/// Content type of the status-change body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Primary key of an incident (`Observacion`) record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidenciaId(pub u64);

impl IncidenciaId {
    /// Parse an identifier taken from a `data-obs-id` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidId`] unless `raw` is a positive decimal integer.
    pub fn parse(raw: &str) -> Result<Self, ContractError> {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ContractError::InvalidId(raw.to_owned())),
        }
    }

    /// `POST` target for changing this incident's status.
    #[must_use]
    pub fn status_change_path(self) -> String {
        format!("/incidencias/{}/cambiar-estado/", self.0)
    }

    /// DOM id of the status badge rendered for this incident.
    #[must_use]
    pub fn badge_element_id(self) -> String {
        format!("estado-badge-{}", self.0)
    }
}

impl fmt::Display for IncidenciaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build `{path}?{param}={value}` with `value` form-encoded.
#[must_use]
pub fn with_query(path: &str, param: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(param, value)
        .finish();
    format!("{path}?{query}")
}
