//! Axum router configuration for analysis endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_history, show_form, submit_numbers, AnalysisAppState};

/// Create the analysis routes.
///
/// # Routes
/// - `GET /` - Blank form
/// - `POST /` - Submit `a`..`e` (form-encoded)
/// - `GET /history` - Up to 50 most recent submissions
pub fn analysis_routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/", get(show_form).post(submit_numbers))
        .route("/history", get(list_history))
}

/// Create the analysis router with its state attached.
pub fn analysis_router(state: AnalysisAppState) -> Router {
    analysis_routes().with_state(state)
}
