//! SubmitNumbersHandler - Command handler for analyzing and saving input.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::analysis::{analyze, AnalysisResult, FiveNumbers};
use crate::domain::submission::Submission;
use crate::ports::{StoreError, SubmissionStore};

/// Command to analyze five validated numbers.
#[derive(Debug, Clone)]
pub struct SubmitNumbersCommand {
    pub numbers: FiveNumbers,
}

/// Result of a submission: always carries the analysis.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub input: FiveNumbers,
    pub result: AnalysisResult,
    pub saved: bool,
    pub save_error: Option<StoreError>,
}

/// Handler for number submissions.
pub struct SubmitNumbersHandler {
    store: Arc<dyn SubmissionStore>,
}

impl SubmitNumbersHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitNumbersCommand) -> SubmissionOutcome {
        let result = analyze(&cmd.numbers);
        let submission = Submission::new(cmd.numbers, result.clone());

        let save_error = match self.store.save(&submission).await {
            Ok(()) => {
                debug!(submission_id = %submission.id, "Submission saved");
                None
            }
            Err(err) => {
                warn!(kind = %err.kind, "Submission not saved: {}", err.message);
                Some(err)
            }
        };

        SubmissionOutcome {
            input: cmd.numbers,
            result,
            saved: save_error.is_none(),
            save_error,
        }
    }
}
