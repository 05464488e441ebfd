//! Submission Module - Raw form input and the persisted submission record.
//!
//! - `NumbersForm` - Raw `a`..`e` field text, validated into `FiveNumbers`
//! - `Submission` - Input/result pair stamped with an id and creation time

mod form;
mod record;

pub use form::{FieldErrors, NumbersForm};
pub use record::{Submission, HISTORY_LIMIT};
