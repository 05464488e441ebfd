//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::{
    ListHistoryHandler, ListHistoryQuery, SubmitNumbersCommand, SubmitNumbersHandler,
};
use crate::domain::submission::NumbersForm;
use crate::ports::SubmissionStore;

use super::dto::{FormView, HistoryResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for analysis routes.
///
/// Holds the store behind its port; handlers never know which variant it is.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub store: Arc<dyn SubmissionStore>,
}

impl AnalysisAppState {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub fn submit_handler(&self) -> SubmitNumbersHandler {
        SubmitNumbersHandler::new(self.store.clone())
    }

    pub fn history_handler(&self) -> ListHistoryHandler {
        ListHistoryHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Blank form
pub async fn show_form() -> Json<FormView> {
    Json(FormView::empty())
}

/// POST / - Validate, analyze and try to save
///
/// Invalid input answers 422 with field errors and never reaches the
/// analyzer. A body that cannot be decoded keeps axum's status but still
/// renders the form view. Store failures do not change the status; they
/// ride along in `save_error`.
pub async fn submit_numbers(
    State(state): State<AnalysisAppState>,
    form: Result<Form<NumbersForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "Rejected undecodable form");
            let view = FormView::rejected(rejection.body_text());
            return (rejection.status(), Json(view)).into_response();
        }
    };

    let numbers = match form.validate() {
        Ok(numbers) => numbers,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "Rejected invalid form");
            let view = FormView::invalid(form, &errors);
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response();
        }
    };

    let outcome = state
        .submit_handler()
        .handle(SubmitNumbersCommand { numbers })
        .await;

    Json(FormView::submitted(form, outcome)).into_response()
}

/// GET /history - Most recent submissions, newest first
pub async fn list_history(State(state): State<AnalysisAppState>) -> Json<HistoryResponse> {
    let view = state
        .history_handler()
        .handle(ListHistoryQuery::default())
        .await;
    Json(HistoryResponse::from(view))
}
