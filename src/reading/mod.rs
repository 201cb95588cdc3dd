//! Sensor reading validation and persistence.
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: reading value types ([`domain::SensorReading`], [`domain::NewReading`])
//! - **Ports**: [`ports::repository::ReadingRepository`] and [`ports::validator::ReadingValidator`]
//! - **Adapters**: [`adapters::memory::InMemoryReadingRepository`] and
//!   [`adapters::postgres::PostgresReadingRepository`]
//! - **Validation**: field rules enforced at the ingestion boundary
//! - **Services**: [`services::ReadingStore`], which assigns identity and
//!   creation time before persisting
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use sensorhub::reading::adapters::memory::InMemoryReadingRepository;
//! use sensorhub::reading::ports::validator::ReadingValidator;
//! use sensorhub::reading::services::ReadingStore;
//! use sensorhub::reading::validation::DefaultReadingValidator;
//! use serde_json::json;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .expect("runtime");
//! let store = ReadingStore::new(
//!     Arc::new(InMemoryReadingRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let reading = DefaultReadingValidator::new()
//!     .validate(&json!({
//!         "sensorId": "sensor-1",
//!         "temperatureUnit": "F",
//!         "temperature": 70,
//!         "humidity": 45
//!     }))
//!     .expect("valid reading");
//!
//! let stored = runtime.block_on(store.create(reading)).expect("stored");
//! let all = runtime.block_on(store.list_all()).expect("listed");
//! assert_eq!(all, vec![stored]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
