use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-level validation messages, keyed by form field name.
#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Only the first error of a field is kept.
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_owned())
            .or_insert_with(|| message.to_owned());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
