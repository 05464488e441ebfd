//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionStore` - Optional document store for submission history

mod submission_store;

pub use submission_store::{StoreError, StoreErrorKind, SubmissionStore};
