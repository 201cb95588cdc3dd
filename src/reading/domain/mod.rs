//! Domain model for sensor readings.
//!
//! Value types enforce the reading invariants at construction so that
//! adapters and services only ever handle well-formed readings.

mod error;
mod ids;
mod measurement;
mod reading;

pub use error::{ParseTemperatureUnitError, ReadingDomainError};
pub use ids::{ReadingId, SensorId};
pub use measurement::{Humidity, Temperature, TemperatureUnit};
pub use reading::{NewReading, PersistedReadingData, SensorReading};
