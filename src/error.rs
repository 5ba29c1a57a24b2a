// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `zwave_light` library.
//!
//! Failures fall into four groups: the endpoint lacks a requested feature,
//! the discovered value metadata is unusable, a requested value cannot be
//! represented, or the transport failed to deliver a command.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint does not expose the value point a request needs.
    ///
    /// Raised before any command is sent.
    #[error("endpoint does not support {capability}")]
    UnsupportedCapability {
        /// The missing feature (e.g. `"color temperature"`).
        capability: String,
    },

    /// A discovered value point carries malformed metadata.
    #[error("invalid device metadata: {0}")]
    InvalidDeviceMetadata(#[from] MetadataError),

    /// A requested value is outside what the device can represent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A single transport operation failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// One or more commands of a batch could not be delivered.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Inbound data could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Creates an [`Error::UnsupportedCapability`].
    pub(crate) fn unsupported(capability: impl Into<String>) -> Self {
        Self::UnsupportedCapability {
            capability: capability.into(),
        }
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// A mireds range whose bounds are inverted or equal.
    #[error("invalid mireds range [{min}, {max}]")]
    InvalidMiredsRange {
        /// Coolest bound.
        min: u16,
        /// Warmest bound.
        max: u16,
    },

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(f32),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(f32),
}

/// Errors describing unusable value point metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// A numeric bound the translator relies on is absent.
    #[error("{property} is missing its {bound} bound")]
    MissingBound {
        /// The property whose metadata is incomplete.
        property: String,
        /// `"min"` or `"max"`.
        bound: &'static str,
    },

    /// Bounds that are inverted or do not fit the level scale.
    #[error("{property} has unusable bounds [{min}, {max}]")]
    InvalidBounds {
        /// The property whose metadata is malformed.
        property: String,
        /// Declared minimum.
        min: i64,
        /// Declared maximum.
        max: i64,
    },

    /// The declared value type does not match the command class.
    #[error("{property} has unexpected value type {actual}")]
    UnexpectedType {
        /// The property whose metadata is malformed.
        property: String,
        /// The declared type.
        actual: String,
    },
}

/// Errors raised by a [`Transport`](crate::protocol::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// MQTT client failure.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// Connection to the controller failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid broker URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The controller rejected the command.
    #[error("command rejected: {0}")]
    Rejected(String),

    /// The command could not be encoded for the wire.
    #[error("encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Aggregate failure for a batch of dispatched commands.
///
/// Every command of the batch is attempted; `failures` holds the position
/// of each failed command within the batch together with its error.
#[derive(Debug, Error)]
#[error("{} of {total} commands failed", .failures.len())]
pub struct DispatchError {
    /// Number of commands in the batch.
    pub total: usize,
    /// Failed commands as `(position, error)`.
    pub failures: Vec<(usize, TransportError)>,
}

/// Errors related to parsing inbound controller data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The message is not a value update.
    #[error("unexpected event type: {0}")]
    UnexpectedEvent(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 7620,
            actual: 9000,
        };
        assert_eq!(err.to_string(), "value 9000 is out of range [0, 7620]");
    }

    #[test]
    fn error_from_metadata_error() {
        let err: Error = MetadataError::MissingBound {
            property: "targetValue".to_string(),
            bound: "max",
        }
        .into();
        assert!(matches!(
            err,
            Error::InvalidDeviceMetadata(MetadataError::MissingBound { bound: "max", .. })
        ));
        assert_eq!(
            err.to_string(),
            "invalid device metadata: targetValue is missing its max bound"
        );
    }

    #[test]
    fn unsupported_display() {
        let err = Error::unsupported("color temperature");
        assert_eq!(err.to_string(), "endpoint does not support color temperature");
    }

    #[test]
    fn dispatch_error_display() {
        let err = DispatchError {
            total: 2,
            failures: vec![(1, TransportError::Rejected("busy".to_string()))],
        };
        assert_eq!(err.to_string(), "1 of 2 commands failed");
    }
}
