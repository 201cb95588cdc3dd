//! Shared test helpers for in-memory store integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use sensorhub::reading::{
    adapters::memory::InMemoryReadingRepository,
    domain::{Humidity, NewReading, SensorId, Temperature, TemperatureUnit},
    services::ReadingStore,
};
use std::sync::Arc;

/// Store type used by in-memory integration tests.
pub type MemoryStore = ReadingStore<InMemoryReadingRepository, DefaultClock>;

/// Provides a store over a fresh in-memory repository.
#[fixture]
pub fn store() -> MemoryStore {
    ReadingStore::new(
        Arc::new(InMemoryReadingRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds a validated reading for `sensor`.
///
/// # Panics
///
/// Panics when the supplied values are not a valid reading.
#[must_use]
pub fn reading_for(sensor: &str, humidity: f64) -> NewReading {
    NewReading::new(
        SensorId::new(sensor).expect("valid sensor id"),
        TemperatureUnit::Celsius,
        Temperature::new(21.0).expect("finite temperature"),
        Humidity::new(humidity).expect("humidity in range"),
    )
}
