//! Submission store port for the optional document-store backend.
//!
//! The store may be absent or unreachable. Implementations never panic or
//! block indefinitely; every failure comes back as a `StoreError` whose
//! `kind` tells callers why persistence did not happen.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::submission::Submission;

/// Port for saving and listing submissions.
///
/// Implementations should be thread-safe and support concurrent access.
/// No read-after-write guarantee is required.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Appends a submission.
    async fn save(&self, submission: &Submission) -> Result<(), StoreError>;

    /// Returns up to `limit` submissions, newest `created_at` first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, StoreError>;
}

/// Why a store operation did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    /// No store URI is configured.
    NotConfigured,
    /// The backend could not be reached within the connect timeout.
    Unavailable,
    /// The backend rejected a save.
    WriteFailed,
    /// The backend failed a listing.
    ReadFailed,
}

impl StoreErrorKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreErrorKind::NotConfigured => "not_configured",
            StoreErrorKind::Unavailable => "unavailable",
            StoreErrorKind::WriteFailed => "write_failed",
            StoreErrorKind::ReadFailed => "read_failed",
        }
    }
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-fatal store failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotConfigured, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable, message)
    }

    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::WriteFailed, message)
    }

    pub fn read_failed(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::ReadFailed, message)
    }

    /// Human-readable text suitable for display next to a result.
    pub fn diagnostic(&self) -> String {
        match self.kind {
            StoreErrorKind::NotConfigured => {
                format!("Document store is not configured: {}", self.message)
            }
            StoreErrorKind::Unavailable => {
                format!("Document store is unreachable: {}", self.message)
            }
            StoreErrorKind::WriteFailed => format!("Failed to save submission: {}", self.message),
            StoreErrorKind::ReadFailed => format!("Failed to fetch history: {}", self.message),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic())
    }
}

impl std::error::Error for StoreError {}
