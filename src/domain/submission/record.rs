//! Persisted submission record.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisResult, FiveNumbers};
use crate::domain::foundation::{SubmissionId, Timestamp};

/// Number of entries the history view shows.
pub const HISTORY_LIMIT: usize = 50;

/// One stored input/result pair.
///
/// Append-only: created on a successful submission, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub input: FiveNumbers,
    pub result: AnalysisResult,
    pub created_at: Timestamp,
}

impl Submission {
    /// Creates a record stamped with a fresh id and the current time.
    pub fn new(input: FiveNumbers, result: AnalysisResult) -> Self {
        Self::recorded_at(input, result, Timestamp::now())
    }

    /// Creates a record with an explicit creation time.
    pub fn recorded_at(input: FiveNumbers, result: AnalysisResult, created_at: Timestamp) -> Self {
        Self {
            id: SubmissionId::new(),
            input,
            result,
            created_at,
        }
    }
}
