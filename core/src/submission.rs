//! Sell-form submission workflow.
//!
//! # Design
//! `SubmissionForm` is an explicit two-state machine (`Idle`, `Submitting`)
//! that never performs I/O itself. [`SubmissionForm::submit`] validates and
//! hands back the payload to send; the caller runs the request and feeds the
//! outcome to [`SubmissionForm::complete`]. [`SubmissionForm::submit_with`]
//! does both steps for callers holding a [`Transport`].
//!
//! Editing a field clears only that field's error. The full rule set runs
//! again on every submit.

use thiserror::Error;

use crate::client::CatalogClient;
use crate::error::FetchError;
use crate::http::Transport;
use crate::types::{NewProduct, Product};
use crate::validation::{Draft, ErrorSet, Field};

pub const CREATED_NOTICE: &str = "Product created successfully!";
pub const CREATE_FAILED_NOTICE: &str = "Could not create the product. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Why `submit` did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ErrorSet),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Emitted once per finished attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Created(Product),
    Failed,
}

/// User-facing outcome message of the last attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    CreateFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Created => CREATED_NOTICE,
            Notice::CreateFailed => CREATE_FAILED_NOTICE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionForm {
    draft: Draft,
    errors: ErrorSet,
    state: SubmissionState,
    notice: Option<Notice>,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self {
            draft: Draft::new(),
            errors: ErrorSet::new(),
            state: SubmissionState::Idle,
            notice: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validate the draft and, if clean, move to `Submitting` and return the
    /// payload the caller must send.
    pub fn submit(&mut self) -> Result<NewProduct, SubmitRejected> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.errors.clear();
                self.notice = None;
                self.state = SubmissionState::Submitting;
                tracing::debug!(titulo = %payload.titulo, "submitting product");
                Ok(payload)
            }
            Err(errors) => {
                tracing::debug!(invalid = errors.len(), "submission rejected by validation");
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Apply the store's answer to the in-flight submission. Returns `None`
    /// when nothing was in flight.
    pub fn complete(&mut self, outcome: Result<Product, FetchError>) -> Option<SubmissionEvent> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        self.state = SubmissionState::Idle;
        match outcome {
            Ok(product) => {
                tracing::info!(id = product.id, "product created");
                self.draft = Draft::new();
                self.errors.clear();
                self.notice = Some(Notice::Created);
                Some(SubmissionEvent::Created(product))
            }
            Err(err) => {
                tracing::warn!(error = %err, "product submission failed");
                self.notice = Some(Notice::CreateFailed);
                Some(SubmissionEvent::Failed)
            }
        }
    }

    /// Run one full attempt: validate, send through `transport`, apply.
    pub fn submit_with<T: Transport>(
        &mut self,
        client: &CatalogClient,
        transport: &T,
    ) -> Result<SubmissionEvent, SubmitRejected> {
        let payload = self.submit()?;
        let outcome = client.create_product(transport, &payload);
        // `submit` just moved the form to `Submitting`, so `complete` always yields an event.
        Ok(self.complete(outcome).unwrap_or(SubmissionEvent::Failed))
    }

    /// Discard the draft and any errors. Refused while a submission is in
    /// flight, so a failed attempt still has its draft to retry with.
    pub fn cancel(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }
        self.draft = Draft::new();
        self.errors.clear();
        self.notice = None;
        true
    }
}
