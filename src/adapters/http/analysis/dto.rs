//! HTTP DTOs (Data Transfer Objects) for analysis endpoints.
//!
//! These types define the JSON views for the form page and the history page.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::handlers::{HistoryView, SubmissionOutcome};
use crate::domain::analysis::{AnalysisResult, FiveNumbers};
use crate::domain::submission::{FieldErrors, NumbersForm, Submission};
use crate::ports::{StoreError, StoreErrorKind};

// ════════════════════════════════════════════════════════════════════════════════
// Form page
// ════════════════════════════════════════════════════════════════════════════════

/// Error key for problems with the request body as a whole.
pub const NON_FIELD_ERRORS: &str = "form";

/// Everything the submission page renders.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    /// Field text as submitted, echoed back for re-display.
    pub form: NumbersForm,
    /// Field name to error message; empty when the form is valid.
    pub errors: BTreeMap<String, String>,
    pub result: Option<AnalysisResult>,
    pub saved: bool,
    pub save_error: Option<StoreErrorResponse>,
}

impl FormView {
    /// Blank form, nothing submitted yet.
    pub fn empty() -> Self {
        Self {
            form: NumbersForm::default(),
            errors: BTreeMap::new(),
            result: None,
            saved: false,
            save_error: None,
        }
    }

    /// Form rejected by validation; no analysis was run.
    pub fn invalid(form: NumbersForm, errors: &FieldErrors) -> Self {
        Self {
            form,
            errors: errors.messages(),
            ..Self::empty()
        }
    }

    /// Request body could not be read as a form at all.
    ///
    /// The reason is reported under the `form` key since no single field
    /// is at fault.
    pub fn rejected(reason: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(NON_FIELD_ERRORS.to_string(), reason.into());
        Self {
            errors,
            ..Self::empty()
        }
    }

    /// Form accepted and analyzed.
    pub fn submitted(form: NumbersForm, outcome: SubmissionOutcome) -> Self {
        Self {
            form,
            errors: BTreeMap::new(),
            result: Some(outcome.result),
            saved: outcome.saved,
            save_error: outcome.save_error.as_ref().map(StoreErrorResponse::from),
        }
    }
}

/// Store failure as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreErrorResponse {
    pub kind: StoreErrorKind,
    /// Human-readable diagnostic.
    pub message: String,
}

impl From<&StoreError> for StoreErrorResponse {
    fn from(err: &StoreError) -> Self {
        Self {
            kind: err.kind,
            message: err.diagnostic(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// History page
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the history listing.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<SubmissionResponse>,
    pub error: Option<StoreErrorResponse>,
}

impl From<HistoryView> for HistoryResponse {
    fn from(view: HistoryView) -> Self {
        Self {
            entries: view.entries.into_iter().map(Into::into).collect(),
            error: view.error.as_ref().map(StoreErrorResponse::from),
        }
    }
}

/// One stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub input: FiveNumbers,
    pub result: AnalysisResult,
    /// When the submission was stored (ISO 8601).
    pub created_at: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.to_string(),
            input: submission.input,
            result: submission.result,
            created_at: submission.created_at.to_rfc3339(),
        }
    }
}
