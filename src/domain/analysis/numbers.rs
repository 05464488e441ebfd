//! The five-number input value object.

use serde::{Deserialize, Serialize};

/// Form field names in input order.
pub const FIELD_NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Exactly five finite values, in the order the user entered them.
///
/// Serializes as `{a, b, c, d, e}`, which is also the stored `input` shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumbers {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl FiveNumbers {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }

    /// Builds from values ordered `a..e`.
    pub fn from_array(values: [f64; 5]) -> Self {
        let [a, b, c, d, e] = values;
        Self { a, b, c, d, e }
    }

    /// Values ordered `a..e`.
    pub fn values(&self) -> [f64; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }
}

impl From<[f64; 5]> for FiveNumbers {
    fn from(values: [f64; 5]) -> Self {
        Self::from_array(values)
    }
}
