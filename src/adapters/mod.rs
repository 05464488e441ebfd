//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for the form and history pages
//! - `store` - Submission store implementations (disabled, in-memory, Redis)

pub mod http;
pub mod store;
