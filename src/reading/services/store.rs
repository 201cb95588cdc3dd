//! Service layer for reading creation and retrieval.

use crate::reading::{
    domain::{NewReading, SensorReading},
    error::ValidationError,
    ports::{ReadingRepository, ReadingRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for reading ingestion.
///
/// The display text is the message clients receive.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The inbound payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Persisting a new reading failed.
    #[error("DB Create Error:{0}")]
    Create(#[source] ReadingRepositoryError),
    /// Reading the stored history failed.
    #[error("DB Read Error:{0}")]
    Read(#[source] ReadingRepositoryError),
}

/// Result type for reading service operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Reading store: assigns identity and creation time, then persists.
///
/// The repository handle is shared by every connection; `R` may be a trait
/// object so the backend can be chosen at startup.
///
/// Stamping and storing happen under one write lock shared by every clone,
/// so `createdAt` never decreases along insertion order.
pub struct ReadingStore<R, C>
where
    R: ReadingRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    last_created_at: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl<R, C> Clone for ReadingStore<R, C>
where
    R: ReadingRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            last_created_at: Arc::clone(&self.last_created_at),
        }
    }
}

impl<R, C> ReadingStore<R, C>
where
    R: ReadingRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new reading store.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            last_created_at: Arc::new(Mutex::new(None)),
        }
    }

    /// Persists a validated reading and returns the stored entity.
    ///
    /// No retry is attempted. A clock that steps backwards is clamped to
    /// the previous creation time.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Create`] when the repository rejects the
    /// write.
    pub async fn create(&self, reading: NewReading) -> IngestionResult<SensorReading> {
        let mut last_created_at = self.last_created_at.lock().await;
        let now = self.clock.utc();
        let created_at = last_created_at.map_or(now, |last| last.max(now));
        let persisted = SensorReading::record_at(reading, created_at);
        self.repository
            .store(&persisted)
            .await
            .map_err(IngestionError::Create)?;
        *last_created_at = Some(persisted.created_at());
        Ok(persisted)
    }

    /// Returns every stored reading in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Read`] when the repository read fails.
    pub async fn list_all(&self) -> IngestionResult<Vec<SensorReading>> {
        self.repository
            .list_all()
            .await
            .map_err(IngestionError::Read)
    }
}
