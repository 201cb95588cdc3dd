//! Socket gateway for sensor readings.
//!
//! Clients connect over WebSocket and exchange `{event, data}` frames:
//!
//! - on connect the server sends a `welcome` frame to that client only
//! - `create sensor data` validates and persists one reading
//! - `show all sensor data` lists every reading in insertion order
//!
//! Successful results arrive as `message` frames; failures arrive as
//! `exception` frames carrying `{status, message, errors?}`.

pub mod channel;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;

pub use channel::{ChannelRegistry, ClientId};
pub use error::GatewayError;
pub use handler::{DynSensorGateway, SensorGateway};
pub use protocol::{ErrorPayload, InboundFrame, OutboundFrame, OutboundPayload};
pub use server::{GatewayState, bind, router, serve};

#[cfg(test)]
mod tests;
