use std::collections::BTreeMap;

use serde::Serialize;

/// Scalar field values for a form's primary entity.
///
/// Writes are unconditional overwrites; reads fall back to the empty default.
/// Select-type fields draw their option range from [`crate::catalog`], but
/// the store itself accepts any string; membership is the presenting layer's
/// concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldStore {
    values: BTreeMap<&'static str, String>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single field. No cross-field validation happens at write
    /// time.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Current value of a field, or the empty default when it was never set.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// First entry from `required` that is absent or blank.
    ///
    /// Blankness trims first, so whitespace-only input does not satisfy a
    /// required field; stored values are never trimmed on read.
    pub fn first_missing(&self, required: &[&'static str]) -> Option<&'static str> {
        required
            .iter()
            .copied()
            .find(|name| self.get(name).trim().is_empty())
    }

    /// Drop every value, returning each field to its empty default.
    pub fn reset(&mut self) {
        self.values.clear();
    }
}
