//! Form parsing for the five numeric fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::analysis::{FiveNumbers, FIELD_NAMES};
use crate::domain::foundation::ValidationError;

/// Raw field text exactly as submitted.
///
/// Kept as text so an invalid form can be shown back to the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersForm {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
    #[serde(default)]
    pub c: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

/// Field-level validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field().to_string(), error);
    }

    /// Field name to display message.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(field, err)| (field.clone(), err.to_string()))
            .collect()
    }
}

impl NumbersForm {
    /// Creates a form from five field strings, in `a..e` order.
    pub fn from_fields(fields: [&str; 5]) -> Self {
        let [a, b, c, d, e] = fields.map(|f| Some(f.to_string()));
        Self { a, b, c, d, e }
    }

    fn raw_fields(&self) -> [Option<&str>; 5] {
        [
            self.a.as_deref(),
            self.b.as_deref(),
            self.c.as_deref(),
            self.d.as_deref(),
            self.e.as_deref(),
        ]
    }

    /// Validates every field, reporting all failures at once.
    ///
    /// Blank and missing fields are required errors. Text that does not
    /// parse, or parses to infinity or NaN, is not a number.
    pub fn validate(&self) -> Result<FiveNumbers, FieldErrors> {
        let mut errors = FieldErrors::default();
        let mut values = [0.0_f64; 5];

        for (i, (name, raw)) in FIELD_NAMES.iter().zip(self.raw_fields()).enumerate() {
            match parse_field(name, raw) {
                Ok(value) => values[i] = value,
                Err(err) => errors.insert(err),
            }
        }

        if errors.is_empty() {
            Ok(FiveNumbers::from_array(values))
        } else {
            Err(errors)
        }
    }
}

fn parse_field(name: &str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::required(name));
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::not_a_number(name)),
    }
}
