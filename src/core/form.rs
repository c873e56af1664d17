//! Raw form payloads
//!
//! Actions receive submitted fields as a loose string map, the shape an
//! HTML form post produces. Typed interpretation happens in the
//! validation layer, never here.

use std::collections::HashMap;

/// Submitted form fields: field name → raw string value.
///
/// Absent fields and empty fields are distinct at this layer; the
/// validation schema decides whether that distinction matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a field, if the field was submitted.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Builder-style setter, replacing any previous value for the field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
