//! In-memory submission store for tests and local development.
//!
//! Holds submissions in process memory; nothing survives a restart.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::submission::Submission;
use crate::ports::{StoreError, SubmissionStore};

/// Process-local SubmissionStore.
///
/// Features:
/// - Newest-first listing, ties broken by insertion order
/// - Switchable write/read failures for exercising degraded paths
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemorySubmissionStore::new());
/// store.save(&submission).await?;
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    submissions: RwLock<Vec<Submission>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemorySubmissionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with submissions.
    pub fn with_submissions(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: RwLock::new(submissions),
            ..Self::default()
        }
    }

    // === Test Helpers ===

    /// Makes subsequent saves fail with `WriteFailed`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent listings fail with `ReadFailed`.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of stored submissions.
    pub fn len(&self) -> usize {
        self.submissions.read().map(|s| s.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed("in-memory store rejected the write"));
        }

        let mut submissions = self
            .submissions
            .write()
            .map_err(|_| StoreError::write_failed("in-memory store lock poisoned"))?;
        submissions.push(submission.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read_failed("in-memory store rejected the read"));
        }

        let submissions = self
            .submissions
            .read()
            .map_err(|_| StoreError::read_failed("in-memory store lock poisoned"))?;

        let mut recent: Vec<Submission> = submissions.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }
}
