//! Wire contracts for the incident-management endpoints used by the widgets.
//!
//! This crate owns the JSON and form shapes exchanged with the server, the
//! endpoint paths, and the validation applied to server responses. It is
//! shared by the browser `widgets` crate and the local `techo-harness` so
//! both sides agree on one schema.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`endpoints`] | Paths, header names, and the typed incident identifier |
//! | [`lookup`] | Cascading-select lookup payloads and option conversion |
//! | [`status`] | Status-change request, response, and validated outcome |

pub mod endpoints;
pub mod lookup;
pub mod status;

pub use endpoints::IncidenciaId;
pub use lookup::{Lookup, LookupOption};
pub use status::{NuevoEstado, StatusChangeOutcome, StatusChangeRequest, StatusChangeResponse};

/// Error returned when a payload does not match the expected contract.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The body was not valid JSON for the expected shape.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    /// A field required by the contract was absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// A field was present but empty.
    #[error("empty field: {0}")]
    EmptyField(&'static str),
    /// An incident identifier was not a positive integer.
    #[error("invalid incident id: {0:?}")]
    InvalidId(String),
}
