//! Analysis handlers - submitting numbers and reading history.
//!
//! Both handlers degrade instead of failing: store problems come back as
//! data on the outcome so the caller can still render a page.

mod list_history;
mod submit_numbers;

pub use list_history::{HistoryView, ListHistoryHandler, ListHistoryQuery};
pub use submit_numbers::{SubmissionOutcome, SubmitNumbersCommand, SubmitNumbersHandler};
