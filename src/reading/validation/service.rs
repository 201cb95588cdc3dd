//! Validation service implementation.
//!
//! Provides the default implementation of the `ReadingValidator` port,
//! combining the field rules into a strict allow-list validator.

use crate::reading::{
    domain::{Humidity, NewReading, ReadingDomainError, SensorId, Temperature, TemperatureUnit},
    error::{FieldViolations, ValidationError},
    ports::validator::{ReadingValidator, ValidationResult},
    validation::rules::{
        self, HUMIDITY_FIELD, READING_FIELDS, SENSOR_ID_FIELD, TEMPERATURE_FIELD,
        TEMPERATURE_UNIT_FIELD,
    },
};
use serde_json::{Map, Value};

/// Default implementation of the reading validator.
///
/// Applies every rule of every field, collecting all failures rather than
/// stopping at the first one.
///
/// # Examples
///
/// ```
/// use sensorhub::reading::ports::validator::ReadingValidator;
/// use sensorhub::reading::validation::DefaultReadingValidator;
/// use serde_json::json;
///
/// let validator = DefaultReadingValidator::new();
/// let reading = validator
///     .validate(&json!({
///         "sensorId": "sensor-1",
///         "temperatureUnit": "C",
///         "temperature": 22,
///         "humidity": 55
///     }))
///     .expect("valid reading");
///
/// assert_eq!(reading.sensor_id().as_str(), "sensor-1");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultReadingValidator;

impl DefaultReadingValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReadingValidator for DefaultReadingValidator {
    fn validate(&self, payload: &Value) -> ValidationResult<NewReading> {
        let object = self.validate_structure(payload)?;
        self.validate_fields(object)?;
        normalize(object)
    }

    fn validate_structure<'a>(
        &self,
        payload: &'a Value,
    ) -> ValidationResult<&'a Map<String, Value>> {
        payload.as_object().ok_or(ValidationError::MalformedInput)
    }

    fn validate_fields(&self, object: &Map<String, Value>) -> ValidationResult<()> {
        let mut violations = FieldViolations::new();

        for spec in &READING_FIELDS {
            rules::check_field(spec, object.get(spec.name()), &mut violations);
        }
        rules::check_allowed_fields(object, &mut violations);

        violations.into_result()
    }
}

/// Builds the typed record once every rule has passed.
fn normalize(object: &Map<String, Value>) -> ValidationResult<NewReading> {
    let sensor_id = object
        .get(SENSOR_ID_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| single_violation(SENSOR_ID_FIELD, "missing sensorId"))
        .and_then(|raw| {
            SensorId::new(raw).map_err(|err| domain_violation(SENSOR_ID_FIELD, &err))
        })?;

    let temperature_unit = object
        .get(TEMPERATURE_UNIT_FIELD)
        .and_then(Value::as_str)
        .and_then(|symbol| TemperatureUnit::try_from(symbol).ok())
        .ok_or_else(|| single_violation(TEMPERATURE_UNIT_FIELD, "missing temperatureUnit"))?;

    let temperature = object
        .get(TEMPERATURE_FIELD)
        .and_then(Value::as_f64)
        .ok_or_else(|| single_violation(TEMPERATURE_FIELD, "missing temperature"))
        .and_then(|value| {
            Temperature::new(value).map_err(|err| domain_violation(TEMPERATURE_FIELD, &err))
        })?;

    let humidity = object
        .get(HUMIDITY_FIELD)
        .and_then(Value::as_f64)
        .ok_or_else(|| single_violation(HUMIDITY_FIELD, "missing humidity"))
        .and_then(|value| {
            Humidity::new(value).map_err(|err| domain_violation(HUMIDITY_FIELD, &err))
        })?;

    Ok(NewReading::new(
        sensor_id,
        temperature_unit,
        temperature,
        humidity,
    ))
}

fn single_violation(field: &str, message: &str) -> ValidationError {
    let mut violations = FieldViolations::new();
    violations.push(field, message);
    ValidationError::Failed(violations)
}

fn domain_violation(field: &str, err: &ReadingDomainError) -> ValidationError {
    single_violation(field, &err.to_string())
}

// Note: Unit tests for DefaultReadingValidator are located in
// src/reading/tests/validation_tests.rs.
