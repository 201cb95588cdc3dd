//! Repository port for reading persistence.

use crate::reading::domain::{ReadingId, SensorReading};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reading repository operations.
pub type ReadingRepositoryResult<T> = Result<T, ReadingRepositoryError>;

/// Reading persistence contract.
///
/// Readings are append-only: there is no update or delete. Implementations
/// must be callable concurrently from every connection handler and must
/// return readings in insertion order.
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Stores a new reading.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingRepositoryError::DuplicateReading`] when the
    /// identifier already exists, or [`ReadingRepositoryError::Persistence`]
    /// when the write fails.
    async fn store(&self, reading: &SensorReading) -> ReadingRepositoryResult<()>;

    /// Returns every stored reading in insertion order.
    ///
    /// Returns an empty vector when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingRepositoryError::Persistence`] when the read fails.
    async fn list_all(&self) -> ReadingRepositoryResult<Vec<SensorReading>>;
}

/// Errors returned by reading repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReadingRepositoryError {
    /// A reading with the same identifier already exists.
    #[error("duplicate reading identifier: {0}")]
    DuplicateReading(ReadingId),

    /// Persistence-layer failure; displays the underlying cause.
    #[error("{0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReadingRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
