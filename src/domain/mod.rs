//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, IDs, errors)
//! - `analysis` - The five-number analyzer
//! - `submission` - Form parsing and the persisted submission record

pub mod analysis;
pub mod foundation;
pub mod submission;
