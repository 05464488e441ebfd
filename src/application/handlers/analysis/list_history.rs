//! ListHistoryHandler - Query handler for recent submissions.

use std::sync::Arc;
use tracing::warn;

use crate::domain::submission::{Submission, HISTORY_LIMIT};
use crate::ports::{StoreError, SubmissionStore};

/// Query for the most recent submissions.
#[derive(Debug, Clone)]
pub struct ListHistoryQuery {
    pub limit: usize,
}

impl Default for ListHistoryQuery {
    fn default() -> Self {
        Self {
            limit: HISTORY_LIMIT,
        }
    }
}

/// History listing; `error` is set when the store could not be read.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    pub entries: Vec<Submission>,
    pub error: Option<StoreError>,
}

/// Handler for the history listing.
pub struct ListHistoryHandler {
    store: Arc<dyn SubmissionStore>,
}

impl ListHistoryHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListHistoryQuery) -> HistoryView {
        match self.store.list_recent(query.limit).await {
            Ok(entries) => HistoryView {
                entries,
                error: None,
            },
            Err(err) => {
                warn!(kind = %err.kind, "History unavailable: {}", err.message);
                HistoryView {
                    entries: Vec::new(),
                    error: Some(err),
                }
            }
        }
    }
}
