//! Sensor reading aggregate and its pre-persistence counterpart.

use super::{Humidity, ReadingId, SensorId, Temperature, TemperatureUnit};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A validated reading that has not been persisted yet.
///
/// Produced by the validator; carries only client-supplied fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    sensor_id: SensorId,
    temperature_unit: TemperatureUnit,
    temperature: Temperature,
    humidity: Humidity,
}

impl NewReading {
    /// Creates a new unpersisted reading from validated parts.
    #[must_use]
    pub const fn new(
        sensor_id: SensorId,
        temperature_unit: TemperatureUnit,
        temperature: Temperature,
        humidity: Humidity,
    ) -> Self {
        Self {
            sensor_id,
            temperature_unit,
            temperature,
            humidity,
        }
    }

    /// Returns the originating sensor.
    #[must_use]
    pub const fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    /// Returns the temperature unit.
    #[must_use]
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// Returns the temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Returns the humidity.
    #[must_use]
    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }
}

/// Persisted sensor reading.
///
/// Serialises to the wire shape
/// `{id, sensorId, temperatureUnit, temperature, humidity, createdAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    id: ReadingId,
    sensor_id: SensorId,
    temperature_unit: TemperatureUnit,
    temperature: Temperature,
    humidity: Humidity,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedReadingData {
    /// Persisted reading identifier.
    pub id: ReadingId,
    /// Persisted sensor identifier.
    pub sensor_id: SensorId,
    /// Persisted temperature unit.
    pub temperature_unit: TemperatureUnit,
    /// Persisted temperature.
    pub temperature: Temperature,
    /// Persisted humidity.
    pub humidity: Humidity,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl SensorReading {
    /// Assigns identity and creation time to a validated reading.
    ///
    /// The timestamp is truncated to microseconds, the precision every
    /// backend stores.
    #[must_use]
    pub fn record(reading: NewReading, clock: &impl Clock) -> Self {
        Self::record_at(reading, clock.utc())
    }

    /// Assigns identity and the given creation time to a validated reading.
    #[must_use]
    pub fn record_at(reading: NewReading, created_at: DateTime<Utc>) -> Self {
        let NewReading {
            sensor_id,
            temperature_unit,
            temperature,
            humidity,
        } = reading;

        Self {
            id: ReadingId::new(),
            sensor_id,
            temperature_unit,
            temperature,
            humidity,
            created_at: created_at.trunc_subsecs(6),
        }
    }

    /// Reconstructs a reading from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReadingData) -> Self {
        Self {
            id: data.id,
            sensor_id: data.sensor_id,
            temperature_unit: data.temperature_unit,
            temperature: data.temperature,
            humidity: data.humidity,
            created_at: data.created_at,
        }
    }

    /// Returns the reading identifier.
    #[must_use]
    pub const fn id(&self) -> ReadingId {
        self.id
    }

    /// Returns the originating sensor.
    #[must_use]
    pub const fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    /// Returns the temperature unit.
    #[must_use]
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// Returns the temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Returns the humidity.
    #[must_use]
    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
