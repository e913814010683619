//! REST helpers for the lookup and status-change endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`RequestError::Unavailable`] so the state
//! machines that consume these results stay testable off the browser.
//!
//! ERROR HANDLING
//! ==============
//! A body that decodes under the contract is accepted whatever the HTTP
//! status, mirroring how the server reports business failures in JSON. When
//! decoding fails, a non-2xx status is reported as [`RequestError::Status`]
//! and anything else as [`RequestError::Contract`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::{ContractError, IncidenciaId, Lookup, LookupOption, StatusChangeOutcome, StatusChangeRequest};

/// Failure of a request to the server.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response, or the body could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// Undecodable body with a non-success HTTP status.
    #[error("server responded {0}")]
    Status(u16),
    /// The body did not match the endpoint contract.
    #[error(transparent)]
    Contract(#[from] ContractError),
    /// The page carries no `csrfmiddlewaretoken` input.
    #[error("csrf token not found on page")]
    MissingCsrfToken,
    /// Called outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn settle_body<T>(status: u16, decoded: Result<T, ContractError>) -> Result<T, RequestError> {
    match decoded {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Err(RequestError::Status(status)),
        Err(e) => Err(RequestError::Contract(e)),
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn network(e: gloo_net::Error) -> RequestError {
    RequestError::Network(e.to_string())
}

/// Fetch the options for `lookup` under `parent_id`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a body that does not
/// match the lookup envelope.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn fetch_lookup(lookup: Lookup, parent_id: &str) -> Result<Vec<LookupOption>, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&lookup.url(parent_id))
            .send()
            .await
            .map_err(network)?;
        let body = resp.text().await.map_err(network)?;
        settle_body(resp.status(), lookup.parse_options(&body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(RequestError::Unavailable)
    }
}

/// Submit a status change via `POST /incidencias/{id}/cambiar-estado/`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure, an undecodable body, or a
/// success answer without a usable `nuevo_estado`. A server-side refusal is
/// not an error: it arrives as [`StatusChangeOutcome::Rejected`].
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn post_status_change(
    target: IncidenciaId,
    request: &StatusChangeRequest,
    csrf_token: &str,
) -> Result<StatusChangeOutcome, RequestError> {
    #[cfg(feature = "csr")]
    {
        use contracts::StatusChangeResponse;
        use contracts::endpoints::{CSRF_HEADER, FORM_CONTENT_TYPE, REQUESTED_WITH_HEADER, XHR_MARKER};

        let resp = gloo_net::http::Request::post(&target.status_change_path())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header(REQUESTED_WITH_HEADER, XHR_MARKER)
            .header(CSRF_HEADER, csrf_token)
            .body(request.to_form_body())
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body = resp.text().await.map_err(network)?;
        settle_body(resp.status(), StatusChangeResponse::parse(&body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(RequestError::Unavailable)
    }
}
