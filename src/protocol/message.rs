//! Message schema shared with the paired device.
//!
//! Payloads are JSON objects.  Field presence is the only contract:
//!
//! | Field               | Type      | Direction |
//! |---------------------|-----------|-----------|
//! | `message_type`      | string    | outbound  |
//! | `minutes_to_launch` | integer   | inbound   |
//! | `rocket_name`       | string    | inbound   |
//! | `temperature`       | integer   | inbound   |
//! | `conditions`        | integer   | inbound   |
//! | `units`             | string    | inbound   |
//!
//! Inbound fields are extracted one by one.  A field with the wrong type
//! is dropped on its own and never poisons the rest of the message.

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::sync::SyncRequest;

/// Field keys, as they appear on the wire.
pub mod keys {
    pub const MESSAGE_TYPE: &str = "message_type";
    pub const MINUTES_TO_LAUNCH: &str = "minutes_to_launch";
    pub const ROCKET_NAME: &str = "rocket_name";
    pub const TEMPERATURE: &str = "temperature";
    pub const CONDITIONS: &str = "conditions";
    pub const UNITS: &str = "units";
}

/// Errors from encoding or decoding payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Payload is not valid JSON.
    Malformed,
    /// Payload is JSON but not an object.
    NotAnObject,
    /// Encoded payload does not fit the frame or outbox.
    FrameTooLarge,
    /// `message_type` is missing or not a known request.
    UnknownRequest,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed payload"),
            Self::NotAnObject => write!(f, "payload is not an object"),
            Self::FrameTooLarge => write!(f, "frame too large"),
            Self::UnknownRequest => write!(f, "unknown request type"),
        }
    }
}

/// One inbound message; any subset of fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_to_launch: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl InboundMessage {
    /// Decode a JSON payload, dropping any field of the wrong type.
    pub fn decode(payload: &[u8]) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_slice(payload).map_err(|_| CodecError::Malformed)?;
        let Value::Object(obj) = value else {
            return Err(CodecError::NotAnObject);
        };
        Ok(Self {
            minutes_to_launch: int_field(&obj, keys::MINUTES_TO_LAUNCH),
            rocket_name: str_field(&obj, keys::ROCKET_NAME),
            temperature: int_field(&obj, keys::TEMPERATURE),
            conditions: int_field(&obj, keys::CONDITIONS),
            units: str_field(&obj, keys::UNITS),
        })
    }

    /// Encode as a JSON payload (companion side).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(|_| CodecError::Malformed)
    }

    /// `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        self.minutes_to_launch.is_none()
            && self.rocket_name.is_none()
            && self.temperature.is_none()
            && self.conditions.is_none()
            && self.units.is_none()
    }

    /// Temperature and condition, only when both are present.
    pub fn observation(&self) -> Option<(i32, i32)> {
        self.temperature.zip(self.conditions)
    }
}

#[derive(Serialize, Deserialize)]
struct OutboundRequest {
    message_type: SyncRequest,
}

/// Encode an outbound request, e.g. `{"message_type":"rocket"}`.
pub fn encode_request(request: SyncRequest) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(&OutboundRequest {
        message_type: request,
    })
    .map_err(|_| CodecError::Malformed)
}

/// Decode an outbound request (companion side).
pub fn decode_request(payload: &[u8]) -> Result<SyncRequest, CodecError> {
    let value: Value = serde_json::from_slice(payload).map_err(|_| CodecError::Malformed)?;
    let Value::Object(obj) = value else {
        return Err(CodecError::NotAnObject);
    };
    match obj.get(keys::MESSAGE_TYPE).and_then(Value::as_str) {
        Some("rocket") => Ok(SyncRequest::Rocket),
        Some("weather") => Ok(SyncRequest::Weather),
        _ => Err(CodecError::UnknownRequest),
    }
}

fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    let raw = obj.get(key)?;
    let parsed = raw.as_i64().and_then(|v| i32::try_from(v).ok());
    if parsed.is_none() {
        debug!("inbound: dropping '{}' (not an i32): {}", key, raw);
    }
    parsed
}

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let raw = obj.get(key)?;
    let parsed = raw.as_str().map(str::to_owned);
    if parsed.is_none() {
        debug!("inbound: dropping '{}' (not a string): {}", key, raw);
    }
    parsed
}
