//! Sensorhub: a socket service that records environmental sensor readings.
//!
//! Clients connect over WebSocket, submit temperature and humidity readings,
//! and list every reading stored so far. Each submission is validated against
//! a strict field allow-list before it is persisted.
//!
//! # Architecture
//!
//! Sensorhub follows hexagonal architecture principles:
//!
//! - **Domain**: Reading value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for validation and persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`reading`]: Reading model, validation, persistence and the store service
//! - [`gateway`]: WebSocket protocol, event dispatch and server
//! - [`config`]: Environment-driven runtime configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod reading;
pub mod telemetry;
