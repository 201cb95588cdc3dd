//! Validator port for inbound reading payloads.

use crate::reading::{domain::NewReading, error::ValidationError};
use serde_json::{Map, Value};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for reading validation.
///
/// Validation occurs in layers:
/// 1. Structure (the payload is an object)
/// 2. Field rules (presence, type, enum membership, bounds, allow-list)
/// 3. Normalisation into a [`NewReading`]
///
/// Implementations collect every failing rule before returning and must be
/// stateless and thread-safe.
pub trait ReadingValidator: Send + Sync {
    /// Validates a payload and normalises it into a [`NewReading`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] for non-object payloads
    /// and [`ValidationError::Failed`] when any field rule fails.
    fn validate(&self, payload: &Value) -> ValidationResult<NewReading>;

    /// Checks that the payload is a JSON object and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] otherwise.
    fn validate_structure<'a>(
        &self,
        payload: &'a Value,
    ) -> ValidationResult<&'a Map<String, Value>>;

    /// Runs every field rule against an object payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Failed`] with all collected violations.
    fn validate_fields(&self, object: &Map<String, Value>) -> ValidationResult<()>;
}
