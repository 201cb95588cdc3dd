//! Individual field rules for reading payloads.
//!
//! Each rule is a pure predicate over an optional JSON value paired with the
//! message reported when it fails. Rules for one field never short-circuit:
//! a missing humidity fails its bounds as well as its type check.

use crate::reading::{
    domain::{Humidity, TemperatureUnit},
    error::FieldViolations,
};
use serde_json::{Map, Value};

/// Wire name of the sensor identifier field.
pub const SENSOR_ID_FIELD: &str = "sensorId";
/// Wire name of the temperature unit field.
pub const TEMPERATURE_UNIT_FIELD: &str = "temperatureUnit";
/// Wire name of the temperature field.
pub const TEMPERATURE_FIELD: &str = "temperature";
/// Wire name of the humidity field.
pub const HUMIDITY_FIELD: &str = "humidity";

/// A single named constraint on one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    check: fn(Option<&Value>) -> bool,
    message: &'static str,
}

impl FieldRule {
    /// Creates a rule from a predicate and its failure message.
    #[must_use]
    pub const fn new(check: fn(Option<&Value>) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }

    /// Returns `true` when the value satisfies the rule.
    #[must_use]
    pub fn passes(&self, value: Option<&Value>) -> bool {
        (self.check)(value)
    }

    /// Returns the message reported on failure.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// The rules declared for one field, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    name: &'static str,
    rules: &'static [FieldRule],
}

impl FieldSpec {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared rules.
    #[must_use]
    pub const fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }
}

const SENSOR_ID_MESSAGE: &str = "Provide valid sensor_id (string)";
const TEMPERATURE_UNIT_MESSAGE: &str = "Provide valid temperatureUnit (C or F)";
const TEMPERATURE_MESSAGE: &str = "Provide valid temperature (number)";
const HUMIDITY_MESSAGE: &str = "Provide valid humidity (number between 0 and 100)";
const HUMIDITY_MAX_MESSAGE: &str = "Humidity cannot be more than 100";
const HUMIDITY_MIN_MESSAGE: &str = "Humidity cannot be less than 0";

/// Every field a reading payload may carry, in report order.
pub const READING_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: SENSOR_ID_FIELD,
        rules: &[FieldRule::new(is_non_empty_text, SENSOR_ID_MESSAGE)],
    },
    FieldSpec {
        name: TEMPERATURE_UNIT_FIELD,
        rules: &[
            FieldRule::new(is_temperature_unit, TEMPERATURE_UNIT_MESSAGE),
            FieldRule::new(is_text, TEMPERATURE_UNIT_MESSAGE),
        ],
    },
    FieldSpec {
        name: TEMPERATURE_FIELD,
        rules: &[FieldRule::new(is_number, TEMPERATURE_MESSAGE)],
    },
    FieldSpec {
        name: HUMIDITY_FIELD,
        rules: &[
            FieldRule::new(is_at_most_max_humidity, HUMIDITY_MAX_MESSAGE),
            FieldRule::new(is_at_least_min_humidity, HUMIDITY_MIN_MESSAGE),
            FieldRule::new(is_number, HUMIDITY_MESSAGE),
        ],
    },
];

/// Runs every rule of `spec` against `value` and records each failure.
pub fn check_field(spec: &FieldSpec, value: Option<&Value>, violations: &mut FieldViolations) {
    for rule in spec.rules() {
        if !rule.passes(value) {
            violations.push(spec.name(), rule.message());
        }
    }
}

/// Records a violation for every key outside [`READING_FIELDS`].
pub fn check_allowed_fields(object: &Map<String, Value>, violations: &mut FieldViolations) {
    for key in object.keys() {
        let allowed = READING_FIELDS.iter().any(|spec| spec.name() == key);
        if !allowed {
            violations.push(key, format!("property {key} should not exist"));
        }
    }
}

fn is_text(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_string)
}

fn is_non_empty_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|text| !text.trim().is_empty())
}

fn is_temperature_unit(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|symbol| TemperatureUnit::try_from(symbol).is_ok())
}

fn is_number(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_number)
}

fn is_at_most_max_humidity(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(|humidity| humidity <= Humidity::MAX)
}

fn is_at_least_min_humidity(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(|humidity| humidity >= Humidity::MIN)
}
