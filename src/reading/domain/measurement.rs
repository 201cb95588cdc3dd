//! Measurement value types: temperature unit, temperature and humidity.

use super::{ParseTemperatureUnitError, ReadingDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a temperature was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius, wire symbol `C`.
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit, wire symbol `F`.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the canonical wire and storage symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = ParseTemperatureUnitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            _ => Err(ParseTemperatureUnitError(value.to_owned())),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature magnitude. Any finite value is accepted regardless of unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a temperature value.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingDomainError::NonFiniteTemperature`] for `NaN` or
    /// infinite values.
    pub const fn new(value: f64) -> Result<Self, ReadingDomainError> {
        if !value.is_finite() {
            return Err(ReadingDomainError::NonFiniteTemperature(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Relative humidity in percent, within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Humidity(f64);

impl Humidity {
    /// Lowest accepted humidity.
    pub const MIN: f64 = 0.0;
    /// Highest accepted humidity.
    pub const MAX: f64 = 100.0;

    /// Creates a validated humidity value.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingDomainError::HumidityOutOfRange`] when the value is
    /// below [`Self::MIN`], above [`Self::MAX`], or not a number.
    pub fn new(value: f64) -> Result<Self, ReadingDomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ReadingDomainError::HumidityOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}
