//! Submission store adapters.
//!
//! Implementations of the SubmissionStore port for different backends.
//!
//! ## Available Adapters
//!
//! - `DisabledSubmissionStore` - No backend; every call reports why
//! - `InMemorySubmissionStore` - Process-local, for tests and development
//! - `RedisSubmissionStore` - Redis-backed document store for deployments
//!
//! ## Usage
//!
//! ```ignore
//! use bitwise::adapters::store;
//!
//! let store = store::connect(&config.store);
//! // handlers only see Arc<dyn SubmissionStore>
//! ```

mod disabled;
mod in_memory;
mod redis;

pub use disabled::DisabledSubmissionStore;
pub use in_memory::InMemorySubmissionStore;
pub use redis::RedisSubmissionStore;

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::ports::SubmissionStore;

/// Chooses the store variant for this process.
///
/// No URI means persistence is disabled. A URI that cannot be parsed also
/// yields a disabled store carrying the parse error. Connectivity is not
/// checked here; the live store probes lazily on first use.
pub fn connect(config: &StoreConfig) -> Arc<dyn SubmissionStore> {
    if !config.is_configured() {
        tracing::info!("Document store not configured; submissions will not be persisted");
        return Arc::new(DisabledSubmissionStore::not_configured());
    }

    match RedisSubmissionStore::new(config) {
        Ok(store) => {
            tracing::info!(namespace = %config.namespace(), "Document store configured");
            Arc::new(store)
        }
        Err(err) => {
            tracing::warn!("Document store disabled: {}", err);
            Arc::new(DisabledSubmissionStore::with_reason(err))
        }
    }
}
