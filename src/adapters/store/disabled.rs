//! Store used when persistence is switched off.

use async_trait::async_trait;

use crate::domain::submission::Submission;
use crate::ports::{StoreError, SubmissionStore};

/// SubmissionStore with no backend.
///
/// Every call fails with the same reason, so the submission page still
/// renders its result and the history page shows why it is empty.
#[derive(Debug, Clone)]
pub struct DisabledSubmissionStore {
    reason: StoreError,
}

impl Default for DisabledSubmissionStore {
    fn default() -> Self {
        Self::not_configured()
    }
}

impl DisabledSubmissionStore {
    /// Store disabled because no URI was configured.
    pub fn not_configured() -> Self {
        Self {
            reason: StoreError::not_configured("BITWISE__STORE__URI is not set"),
        }
    }

    /// Store disabled for an explicit reason.
    pub fn with_reason(reason: StoreError) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl SubmissionStore for DisabledSubmissionStore {
    async fn save(&self, _submission: &Submission) -> Result<(), StoreError> {
        Err(self.reason.clone())
    }

    async fn list_recent(&self, _limit: usize) -> Result<Vec<Submission>, StoreError> {
        Err(self.reason.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{analyze, FiveNumbers};
    use crate::ports::StoreErrorKind;

    #[tokio::test]
    async fn save_reports_not_configured() {
        let store = DisabledSubmissionStore::not_configured();
        let input = FiveNumbers::new(1.0, 2.0, 3.0, 4.0, 5.0);

        let err = store
            .save(&Submission::new(input, analyze(&input)))
            .await
            .unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::NotConfigured);
        assert!(!err.diagnostic().is_empty());
    }

    #[tokio::test]
    async fn list_reports_custom_reason() {
        let store = DisabledSubmissionStore::with_reason(StoreError::unavailable("bad uri"));
        let err = store.list_recent(50).await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Unavailable);
        assert_eq!(err.message, "bad uri");
    }
}
