//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    HistoryView, ListHistoryHandler, ListHistoryQuery, SubmissionOutcome, SubmitNumbersCommand,
    SubmitNumbersHandler,
};
