//! Status-change dialog for incident rows.
//!
//! DESIGN
//! ======
//! The incident being edited travels as data: a trigger opens the dialog
//! with its [`IncidenciaId`], confirming turns the dialog's target and the
//! form fields into a [`Submission`], and the request result is settled
//! against the submission's own target. Nothing reads a shared "current
//! row" after the request goes out, so a trigger clicked mid-request cannot
//! redirect the badge update.
//!
//! ```text
//!   Closed --open(id)--> Open{id} --confirm--> Submitting{id}
//!     ^                    ^  |                   |
//!     |                    |  +----open(id2)      | settle: rejected/error
//!     |                    +----------------------+
//!     +---------------- settle: applied / close
//! ```
//!
//! A request settling for an incident other than the current target leaves
//! the dialog alone, so an older request cannot reopen or close a dialog that
//! is busy with a newer one.

#[cfg(test)]
#[path = "status_change_test.rs"]
mod status_change_test;

use contracts::{IncidenciaId, StatusChangeOutcome, StatusChangeRequest};

use crate::consts::{GENERIC_STATUS_FAILURE, MISSING_STATUS_MESSAGE};
use crate::net::api::RequestError;
use crate::state::notice::Notice;

/// Values read from `#nuevoEstado` and `#comentario`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusForm {
    pub estado: String,
    pub comentario: String,
}

/// Why a confirmation produced no request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmError {
    /// No incident was picked; silently ignored.
    NoTarget,
    /// A request for this dialog is already in flight; silently ignored.
    InFlight,
    /// No status selected; the user is told.
    NoStatus,
}

impl ConfirmError {
    /// Blocking alert text, if the user should see one.
    #[must_use]
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            Self::NoStatus => Some(MISSING_STATUS_MESSAGE),
            Self::NoTarget | Self::InFlight => None,
        }
    }
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub target: IncidenciaId,
    pub request: StatusChangeRequest,
}

/// Validate the dialog inputs against an explicit target.
///
/// # Errors
///
/// [`ConfirmError::NoTarget`] without a target, [`ConfirmError::NoStatus`]
/// when no status value is chosen.
pub fn prepare(target: Option<IncidenciaId>, form: &StatusForm) -> Result<Submission, ConfirmError> {
    let target = target.ok_or(ConfirmError::NoTarget)?;
    if form.estado.trim().is_empty() {
        return Err(ConfirmError::NoStatus);
    }
    Ok(Submission { target, request: StatusChangeRequest::new(form.estado.as_str(), form.comentario.as_str()) })
}

/// New content for a row's status badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgePatch {
    pub element_id: String,
    pub text: String,
    pub class: String,
}

/// Everything the page must do once a request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub badge: Option<BadgePatch>,
    /// Hide the dialog and reset `#formCambioEstado`.
    pub close_dialog: bool,
    pub notice: Notice,
}

/// Turn a request result into DOM effects for `target`.
#[must_use]
pub fn settle(target: IncidenciaId, result: Result<StatusChangeOutcome, RequestError>) -> Settlement {
    match result {
        Ok(StatusChangeOutcome::Applied { message, estado }) => Settlement {
            badge: Some(BadgePatch {
                element_id: target.badge_element_id(),
                class: estado.badge_class_attr(),
                text: estado.nombre,
            }),
            close_dialog: true,
            notice: Notice::success(message),
        },
        Ok(StatusChangeOutcome::Rejected { message }) => {
            Settlement { badge: None, close_dialog: false, notice: Notice::danger(message) }
        }
        Err(_) => Settlement { badge: None, close_dialog: false, notice: Notice::danger(GENERIC_STATUS_FAILURE) },
    }
}

/// Lifecycle of the status-change dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusDialog {
    #[default]
    Closed,
    Open {
        target: IncidenciaId,
    },
    Submitting {
        target: IncidenciaId,
    },
}

impl StatusDialog {
    /// Incident the next confirmation applies to.
    #[must_use]
    pub fn target(self) -> Option<IncidenciaId> {
        match self {
            Self::Closed => None,
            Self::Open { target } | Self::Submitting { target } => Some(target),
        }
    }

    /// A row trigger was clicked; the new target replaces any previous one.
    pub fn open(&mut self, target: IncidenciaId) {
        *self = Self::Open { target };
    }

    /// The dialog was dismissed.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Validate the form and move to [`StatusDialog::Submitting`].
    ///
    /// # Errors
    ///
    /// See [`prepare`]; also [`ConfirmError::InFlight`] while submitting.
    pub fn confirm(&mut self, form: &StatusForm) -> Result<Submission, ConfirmError> {
        if matches!(self, Self::Submitting { .. }) {
            return Err(ConfirmError::InFlight);
        }
        let submission = prepare(self.target(), form)?;
        *self = Self::Submitting { target: submission.target };
        Ok(submission)
    }

    /// Apply a settled request for `target`.
    ///
    /// Only a request for the dialog's current target moves it: a success
    /// closes it and anything else reopens a submitting dialog for another
    /// attempt. A request for another incident still patches its own badge
    /// and shows its notice, but leaves the dialog as it is.
    pub fn settle(&mut self, target: IncidenciaId, result: Result<StatusChangeOutcome, RequestError>) -> Settlement {
        let mut settlement = settle(target, result);
        if self.target() != Some(target) {
            settlement.close_dialog = false;
        } else if settlement.close_dialog {
            *self = Self::Closed;
        } else if let Self::Submitting { target } = *self {
            *self = Self::Open { target };
        }
        settlement
    }
}
