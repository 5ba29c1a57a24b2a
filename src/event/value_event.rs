// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound value-change events from the Z-Wave JS server.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::value::{CommandClass, Property};

/// Event names that carry a value change.
const VALUE_EVENTS: [&str; 2] = ["value updated", "value notification"];

/// A `value updated` event for one node.
///
/// # Examples
///
/// ```
/// use zwave_light::event::ValueUpdatedEvent;
///
/// let event = ValueUpdatedEvent::from_json(r#"{
///     "source": "node",
///     "event": "value updated",
///     "nodeId": 39,
///     "args": {
///         "commandClassName": "Multilevel Switch",
///         "commandClass": 38,
///         "endpoint": 0,
///         "property": "currentValue",
///         "newValue": 99,
///         "prevValue": 0,
///         "propertyName": "currentValue"
///     }
/// }"#).unwrap();
///
/// assert_eq!(event.node_id, 39);
/// assert_eq!(event.args.new_value, Some(serde_json::json!(99)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueUpdatedEvent {
    /// Event source, `"node"` for value changes.
    pub source: String,
    /// Event name.
    pub event: String,
    /// Node that reported the change.
    pub node_id: u16,
    /// The changed value.
    pub args: ValueUpdate,
}

/// Address and new content of a changed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueUpdate {
    /// Human-readable command class name.
    #[serde(default)]
    pub command_class_name: String,
    /// Command class identifier.
    pub command_class: CommandClass,
    /// Endpoint index.
    #[serde(default)]
    pub endpoint: u8,
    /// Property within the command class.
    pub property: Property,
    /// Sub-key within the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_key: Option<Property>,
    /// Property name as reported by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Sub-key name as reported by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_key_name: Option<String>,
    /// New value; `None` when the controller sent `null` or nothing.
    #[serde(default)]
    pub new_value: Option<serde_json::Value>,
    /// Previous value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<serde_json::Value>,
}

impl ValueUpdatedEvent {
    /// Creates a `value updated` event.
    #[must_use]
    pub fn new(node_id: u16, args: ValueUpdate) -> Self {
        Self {
            source: "node".to_string(),
            event: VALUE_EVENTS[0].to_string(),
            node_id,
            args,
        }
    }

    /// Parses an event object, or a server message wrapping one.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` for malformed input and
    /// `ParseError::UnexpectedEvent` for events other than value changes.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let mut raw: serde_json::Value = serde_json::from_str(json)?;
        if raw.get("type").and_then(serde_json::Value::as_str) == Some("event")
            && let Some(inner) = raw.get_mut("event").map(serde_json::Value::take)
        {
            raw = inner;
        }
        let event: Self = serde_json::from_value(raw)?;
        if !VALUE_EVENTS.contains(&event.event.as_str()) {
            return Err(ParseError::UnexpectedEvent(event.event));
        }
        Ok(event)
    }
}

impl ValueUpdate {
    /// Creates an update for a named property.
    #[must_use]
    pub fn new(
        command_class: CommandClass,
        endpoint: u8,
        property: &str,
        new_value: serde_json::Value,
    ) -> Self {
        Self {
            command_class_name: command_class.name().to_string(),
            command_class,
            endpoint,
            property: Property::from(property),
            property_key: None,
            property_name: Some(property.to_string()),
            property_key_name: None,
            new_value: (!new_value.is_null()).then_some(new_value),
            prev_value: None,
        }
    }

    /// Sets the numeric property key.
    #[must_use]
    pub fn with_property_key(mut self, key: u32) -> Self {
        self.property_key = Some(Property::Number(key));
        self
    }

    /// Returns `true` if this update addresses `property` of `command_class`.
    #[must_use]
    pub fn is(&self, command_class: CommandClass, property: &str) -> bool {
        self.command_class == command_class && self.property.as_name() == Some(property)
    }
}
