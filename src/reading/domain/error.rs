//! Error types for reading domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain reading values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadingDomainError {
    /// The sensor identifier is empty after trimming.
    #[error("sensor identifier must not be empty")]
    EmptySensorId,

    /// The humidity lies outside the closed interval `[0, 100]`.
    #[error("humidity {0} is outside the range 0..=100")]
    HumidityOutOfRange(f64),

    /// The temperature is `NaN` or infinite.
    #[error("temperature {0} is not a finite number")]
    NonFiniteTemperature(f64),
}

/// Error returned while parsing a temperature unit symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown temperature unit: {0}")]
pub struct ParseTemperatureUnitError(pub String);
