//! Analysis HTTP adapter module.
//!
//! Exposes the number form and the submission history.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalysisAppState;
pub use routes::{analysis_router, analysis_routes};
