//! Error types for reading validation.
//!
//! Uses `thiserror` for typed variants that the gateway maps onto its
//! outbound error payload.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Errors produced while validating an inbound reading payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("Input must be a JSON object")]
    MalformedInput,

    /// One or more field rules failed.
    #[error("Validation failed")]
    Failed(FieldViolations),
}

impl ValidationError {
    /// Returns the field violations for a `Failed` error.
    #[must_use]
    pub const fn violations(&self) -> Option<&FieldViolations> {
        match self {
            Self::Failed(violations) => Some(violations),
            Self::MalformedInput => None,
        }
    }
}

/// Ordered mapping from field name to every violated rule message.
///
/// Fields keep the order in which they were first reported; messages keep
/// rule order. Serialises as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldViolations {
    /// Creates an empty violation set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a violation message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let text = message.into();
        if let Some((_, messages)) = self.entries.iter_mut().find(|(name, _)| name == field) {
            messages.push(text);
        } else {
            self.entries.push((field.to_owned(), vec![text]));
        }
    }

    /// Returns `true` when no violations were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with at least one violation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Iterates fields in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Converts into a validation result, failing when any violation exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Failed`] carrying `self` when non-empty.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Failed(self))
        }
    }
}

impl Serialize for FieldViolations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}
