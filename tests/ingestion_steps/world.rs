//! Shared world state for sensor ingestion BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use sensorhub::gateway::{OutboundFrame, SensorGateway};
use sensorhub::reading::{
    adapters::memory::InMemoryReadingRepository, services::ReadingStore,
    validation::DefaultReadingValidator,
};
use serde_json::Value;

/// Gateway type used by the BDD world.
pub type TestGateway =
    SensorGateway<DefaultReadingValidator, InMemoryReadingRepository, DefaultClock>;

/// Scenario world for sensor ingestion behaviour tests.
pub struct IngestionWorld {
    pub gateway: TestGateway,
    pub last_reply: Option<OutboundFrame>,
}

impl IngestionWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let gateway = SensorGateway::new(
            Arc::new(DefaultReadingValidator::new()),
            ReadingStore::new(
                Arc::new(InMemoryReadingRepository::new()),
                Arc::new(DefaultClock),
            ),
        );
        Self {
            gateway,
            last_reply: None,
        }
    }

    /// Returns the last reply as `(event, data)` JSON.
    pub fn last_reply_json(&self) -> Result<(&'static str, Value), eyre::Report> {
        let reply = self
            .last_reply
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no reply recorded in scenario world"))?;
        let data = serde_json::to_value(reply.data())?;
        Ok((reply.event(), data))
    }
}

impl Default for IngestionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IngestionWorld {
    IngestionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
