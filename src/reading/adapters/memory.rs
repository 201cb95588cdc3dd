//! In-memory repository for reading ingestion tests and the `memory` store
//! backend.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::reading::{
    domain::SensorReading,
    ports::{ReadingRepository, ReadingRepositoryError, ReadingRepositoryResult},
};

/// Thread-safe in-memory reading repository.
///
/// Readings are kept in a vector so insertion order is the natural order.
/// Nothing survives a process restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReadingRepository {
    readings: Arc<RwLock<Vec<SensorReading>>>,
}

impl InMemoryReadingRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingRepository for InMemoryReadingRepository {
    async fn store(&self, reading: &SensorReading) -> ReadingRepositoryResult<()> {
        let mut readings = self.readings.write().map_err(|err| {
            ReadingRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if readings.iter().any(|existing| existing.id() == reading.id()) {
            return Err(ReadingRepositoryError::DuplicateReading(reading.id()));
        }
        readings.push(reading.clone());
        Ok(())
    }

    async fn list_all(&self) -> ReadingRepositoryResult<Vec<SensorReading>> {
        let readings = self.readings.read().map_err(|err| {
            ReadingRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(readings.clone())
    }
}
