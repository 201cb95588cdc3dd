//! Wire envelope for the socket gateway.
//!
//! Every frame in either direction is a JSON text frame shaped as
//! `{"event": <name>, "data": <payload>}`.

use crate::reading::{
    domain::SensorReading, error::FieldViolations, error::ValidationError,
    services::IngestionError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound event that validates and persists one reading.
pub const CREATE_EVENT: &str = "create sensor data";
/// Inbound event that lists every persisted reading.
pub const LIST_EVENT: &str = "show all sensor data";
/// Outbound event sent to a client when it connects.
pub const WELCOME_EVENT: &str = "welcome";
/// Outbound event carrying a successful result.
pub const MESSAGE_EVENT: &str = "message";
/// Outbound event carrying an error payload.
pub const EXCEPTION_EVENT: &str = "exception";

/// Text broadcast to every client when a new client joins.
pub const ANNOUNCEMENT: &str = "Connected to socket";

/// A client frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundFrame {
    /// Event name.
    pub event: String,
    /// Event payload; absent for events that take none.
    #[serde(default)]
    pub data: Option<Value>,
}

impl InboundFrame {
    /// Parses a text frame into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] when the text is not a
    /// JSON object with an `event` string.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(text).map_err(|_| ValidationError::MalformedInput)
    }
}

/// A server frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundFrame {
    event: &'static str,
    data: OutboundPayload,
}

/// Payloads the server may send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundPayload {
    /// Static greeting sent on connect.
    Welcome(WelcomePayload),
    /// A single persisted reading.
    Reading(Box<SensorReading>),
    /// Every persisted reading in insertion order.
    Readings(Vec<SensorReading>),
    /// Plain text notice.
    Notice(&'static str),
    /// Failure details.
    Error(ErrorPayload),
}

impl OutboundFrame {
    /// Greeting sent to a newly connected client.
    #[must_use]
    pub fn welcome() -> Self {
        Self {
            event: WELCOME_EVENT,
            data: OutboundPayload::Welcome(WelcomePayload::default()),
        }
    }

    /// Notice broadcast when a client joins.
    #[must_use]
    pub const fn announcement() -> Self {
        Self {
            event: MESSAGE_EVENT,
            data: OutboundPayload::Notice(ANNOUNCEMENT),
        }
    }

    /// Reply carrying a newly persisted reading.
    #[must_use]
    pub fn reading(reading: SensorReading) -> Self {
        Self {
            event: MESSAGE_EVENT,
            data: OutboundPayload::Reading(Box::new(reading)),
        }
    }

    /// Reply carrying the stored history.
    #[must_use]
    pub const fn readings(readings: Vec<SensorReading>) -> Self {
        Self {
            event: MESSAGE_EVENT,
            data: OutboundPayload::Readings(readings),
        }
    }

    /// Reply carrying an error payload.
    #[must_use]
    pub const fn error(payload: ErrorPayload) -> Self {
        Self {
            event: EXCEPTION_EVENT,
            data: OutboundPayload::Error(payload),
        }
    }

    /// Reply for a frame that is not a JSON object envelope.
    #[must_use]
    pub fn malformed() -> Self {
        Self::error(ErrorPayload::from(&IngestionError::from(
            ValidationError::MalformedInput,
        )))
    }

    /// Returns the event name.
    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }

    /// Returns the payload.
    #[must_use]
    pub const fn data(&self) -> &OutboundPayload {
        &self.data
    }
}

/// Error reply body: `{status: "error", message, errors?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldViolations>,
}

impl ErrorPayload {
    /// Creates an error payload without field details.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            errors: None,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns per-field violations, present only for validation failures.
    #[must_use]
    pub const fn errors(&self) -> Option<&FieldViolations> {
        self.errors.as_ref()
    }
}

impl From<&IngestionError> for ErrorPayload {
    fn from(err: &IngestionError) -> Self {
        let errors = match err {
            IngestionError::Validation(validation) => validation.violations().cloned(),
            IngestionError::Create(_) | IngestionError::Read(_) => None,
        };
        Self {
            status: "error",
            message: err.to_string(),
            errors,
        }
    }
}

/// Static greeting describing the expected reading shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomePayload {
    #[serde(rename = "Welcome")]
    welcome: &'static str,
    #[serde(rename = "Example")]
    example: &'static str,
    #[serde(rename = "--")]
    separator: &'static str,
    #[serde(rename = "weatherDataObject")]
    example_reading: ExampleReading,
}

impl Default for WelcomePayload {
    fn default() -> Self {
        Self {
            welcome: "to the socket server.",
            example: "JSON",
            separator: "----",
            example_reading: ExampleReading {
                sensor_id: "1",
                temperature_unit: "C",
                temperature: 10,
                humidity: 20,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExampleReading {
    sensor_id: &'static str,
    temperature_unit: &'static str,
    temperature: i32,
    humidity: i32,
}
