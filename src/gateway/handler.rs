//! Event dispatch for the socket gateway.

use crate::gateway::protocol::{
    CREATE_EVENT, ErrorPayload, InboundFrame, LIST_EVENT, OutboundFrame,
};
use crate::reading::{
    domain::SensorReading,
    error::ValidationError,
    ports::{ReadingRepository, ReadingValidator},
    services::{IngestionError, IngestionResult, ReadingStore},
    validation::DefaultReadingValidator,
};
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Gateway wired with the default validator and a runtime-selected backend.
pub type DynSensorGateway =
    SensorGateway<DefaultReadingValidator, dyn ReadingRepository, DefaultClock>;

/// Maps inbound events onto validator and store calls.
///
/// Every inbound frame yields exactly one outbound frame; failures become
/// `exception` frames and never escape to the connection loop.
pub struct SensorGateway<V, R, C>
where
    V: ReadingValidator,
    R: ReadingRepository + ?Sized,
    C: Clock + Send + Sync,
{
    validator: Arc<V>,
    store: ReadingStore<R, C>,
}

impl<V, R, C> SensorGateway<V, R, C>
where
    V: ReadingValidator,
    R: ReadingRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a gateway from its collaborators.
    #[must_use]
    pub const fn new(validator: Arc<V>, store: ReadingStore<R, C>) -> Self {
        Self { validator, store }
    }

    /// Handles one raw text frame.
    pub async fn handle_text(&self, text: &str) -> OutboundFrame {
        match InboundFrame::parse(text) {
            Ok(frame) => self.handle_frame(&frame).await,
            Err(err) => {
                warn!(error = %err, "rejected frame that is not an event envelope");
                OutboundFrame::malformed()
            }
        }
    }

    /// Dispatches a parsed frame by event name.
    pub async fn handle_frame(&self, frame: &InboundFrame) -> OutboundFrame {
        match frame.event.as_str() {
            CREATE_EVENT => {
                debug!("create reading requested");
                reply(
                    self.create_reading(frame.data.as_ref()).await,
                    OutboundFrame::reading,
                )
            }
            LIST_EVENT => {
                debug!("reading history requested");
                reply(self.list_readings().await, OutboundFrame::readings)
            }
            other => {
                warn!(event = other, "unsupported event");
                OutboundFrame::error(ErrorPayload::new(format!("Unsupported event '{other}'")))
            }
        }
    }

    /// Validates a payload and persists the resulting reading.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Validation`] when the payload is absent or
    /// fails validation, and [`IngestionError::Create`] when persisting
    /// fails.
    pub async fn create_reading(&self, payload: Option<&Value>) -> IngestionResult<SensorReading> {
        let candidate = payload.ok_or(ValidationError::MalformedInput)?;
        let reading = self.validator.validate(candidate)?;
        self.store.create(reading).await
    }

    /// Returns every persisted reading in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Read`] when the store cannot be read.
    pub async fn list_readings(&self) -> IngestionResult<Vec<SensorReading>> {
        self.store.list_all().await
    }
}

fn reply<T>(result: IngestionResult<T>, success: impl FnOnce(T) -> OutboundFrame) -> OutboundFrame {
    match result {
        Ok(value) => success(value),
        Err(err) => {
            match &err {
                IngestionError::Validation(cause) => {
                    warn!(error = %cause, "reading rejected by validation");
                }
                IngestionError::Create(_) | IngestionError::Read(_) => {
                    error!(error = %err, "reading persistence failed");
                }
            }
            OutboundFrame::error(ErrorPayload::from(&err))
        }
    }
}
