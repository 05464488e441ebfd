//! Analysis Module - Pure domain services for five-number analysis.
//!
//! # Components
//!
//! - `FiveNumbers` - The validated, ordered input (`a`..`e`)
//! - `analyze` - Derives negativity, average, parity and the >10 subset
//! - `AnalysisResult` - Immutable output record of one analysis
//!
//! All functions are pure and stateless. No ports or adapters are needed
//! since there's no I/O.

mod analyzer;
mod numbers;

pub use analyzer::{analyze, AnalysisResult, AVERAGE_THRESHOLD, SUBSET_THRESHOLD};
pub use numbers::{FiveNumbers, FIELD_NAMES};
