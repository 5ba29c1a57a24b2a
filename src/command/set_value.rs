// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set-value commands and their wire form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::TransitionDuration;
use crate::value::{ColorChannel, CommandClass, Property, ValueId};

/// Server command name for writing a value.
pub const SET_VALUE: &str = "node.set_value";

/// Level a Multilevel Switch interprets as "restore the previous level".
pub const RESTORE_PREVIOUS_LEVEL: u8 = 255;

/// Per-channel values for a Color Switch `targetColor` write.
///
/// Serializes as an object keyed by channel name, e.g.
/// `{"red": 255, "green": 76, "blue": 255, "warmWhite": 0, "coldWhite": 0}`.
///
/// # Examples
///
/// ```
/// use zwave_light::command::ColorPayload;
/// use zwave_light::value::ColorChannel;
///
/// let mut payload = ColorPayload::new();
/// payload.set(ColorChannel::Red, 200);
/// payload.set(ColorChannel::Blue, 100);
///
/// let dimmed = payload.scaled_to(100);
/// assert_eq!(dimmed.get(ColorChannel::Red), Some(100));
/// assert_eq!(dimmed.get(ColorChannel::Blue), Some(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPayload(BTreeMap<ColorChannel, u8>);

impl ColorPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one channel.
    pub fn set(&mut self, channel: ColorChannel, value: u8) {
        self.0.insert(channel, value);
    }

    /// Returns one channel's value, if present.
    #[must_use]
    pub fn get(&self, channel: ColorChannel) -> Option<u8> {
        self.0.get(&channel).copied()
    }

    /// Iterates over `(channel, value)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorChannel, u8)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    /// Returns the brightest channel value.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// Scales every channel so the brightest equals `brightness`.
    ///
    /// A payload with every channel at zero is returned unchanged.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled_to(&self, brightness: u8) -> Self {
        let max = self.max_value();
        if max == 0 {
            return self.clone();
        }
        let factor = f32::from(brightness) / f32::from(max);
        Self(
            self.0
                .iter()
                .map(|(c, v)| (*c, (f32::from(*v) * factor).round().min(255.0) as u8))
                .collect(),
        )
    }
}

impl FromIterator<(ColorChannel, u8)> for ColorPayload {
    fn from_iter<I: IntoIterator<Item = (ColorChannel, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The value written by a set-value command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandValue {
    /// Binary switch state.
    Switch(bool),
    /// Multilevel switch level on the native scale.
    Level(u8),
    /// Color switch channels.
    Color(ColorPayload),
}

/// Options accompanying a set-value command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetValueOptions {
    /// How long the device should take to reach the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<TransitionDuration>,
}

impl SetValueOptions {
    /// Options carrying a transition duration.
    #[must_use]
    pub const fn transition(duration: TransitionDuration) -> Self {
        Self {
            transition_duration: Some(duration),
        }
    }
}

/// A request to write one value point on one node.
///
/// # Examples
///
/// ```
/// use zwave_light::command::{CommandValue, SetValueCommand};
/// use zwave_light::value::{CommandClass, ValueId, ValueMetadata, ValueType};
///
/// let target = ValueId::new(
///     CommandClass::SWITCH_MULTILEVEL, 0, "targetValue",
///     ValueMetadata::new(ValueType::Number).with_bounds(0, 99),
/// );
/// let command = SetValueCommand::new(39, target, CommandValue::Level(50));
///
/// let message = command.to_message(uuid::Uuid::nil()).unwrap();
/// assert_eq!(message["command"], "node.set_value");
/// assert_eq!(message["valueId"]["commandClass"], 38);
/// assert_eq!(message["value"], 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetValueCommand {
    /// Target node.
    pub node_id: u16,
    /// Target value point.
    pub value_id: ValueId,
    /// Value to write.
    pub value: CommandValue,
    /// Set-value options, present only when the point accepts them.
    pub options: Option<SetValueOptions>,
}

/// Value id fields the server needs to address a point.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueIdArgs<'a> {
    /// Node, when the envelope does not carry it separately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<u16>,
    /// Command class.
    pub command_class: CommandClass,
    /// Endpoint index.
    pub endpoint: u8,
    /// Property.
    pub property: &'a Property,
    /// Property key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_key: Option<&'a Property>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetValueMessage<'a> {
    message_id: Uuid,
    command: &'static str,
    node_id: u16,
    value_id: ValueIdArgs<'a>,
    value: &'a CommandValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a SetValueOptions>,
}

impl SetValueCommand {
    /// Creates a command without options.
    #[must_use]
    pub fn new(node_id: u16, value_id: ValueId, value: CommandValue) -> Self {
        Self {
            node_id,
            value_id,
            value,
            options: None,
        }
    }

    /// Attaches set-value options.
    #[must_use]
    pub fn with_options(mut self, options: SetValueOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Returns the transition duration, if one is attached.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionDuration> {
        self.options.and_then(|o| o.transition_duration)
    }

    /// Returns the addressing fields of the target point.
    ///
    /// With `include_node` the node id is embedded, as the MQTT gateway
    /// API expects.
    #[must_use]
    pub fn value_id_args(&self, include_node: bool) -> ValueIdArgs<'_> {
        ValueIdArgs {
            node_id: include_node.then_some(self.node_id),
            command_class: self.value_id.command_class,
            endpoint: self.value_id.endpoint,
            property: &self.value_id.property,
            property_key: self.value_id.property_key.as_ref(),
        }
    }

    /// Builds the Z-Wave JS server message for this command.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the message cannot be encoded.
    pub fn to_message(&self, message_id: Uuid) -> Result<serde_json::Value, serde_json::Error> {
        let message = SetValueMessage {
            message_id,
            command: SET_VALUE,
            node_id: self.node_id,
            value_id: self.value_id_args(false),
            value: &self.value,
            options: self.options.as_ref(),
        };
        serde_json::to_value(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{TARGET_COLOR, ValueMetadata, ValueType};
    use serde_json::json;

    fn color_target() -> ValueId {
        ValueId::new(
            CommandClass::SWITCH_COLOR,
            0,
            TARGET_COLOR,
            ValueMetadata::new(ValueType::Any).with_transition(),
        )
    }

    #[test]
    fn color_message_shape() {
        let payload: ColorPayload = [
            (ColorChannel::WarmWhite, 0),
            (ColorChannel::ColdWhite, 0),
            (ColorChannel::Red, 255),
            (ColorChannel::Green, 76),
            (ColorChannel::Blue, 255),
        ]
        .into_iter()
        .collect();
        let command = SetValueCommand::new(39, color_target(), CommandValue::Color(payload))
            .with_options(SetValueOptions::transition(TransitionDuration::Default));
        let id = Uuid::new_v4();

        assert_eq!(
            command.to_message(id).unwrap(),
            json!({
                "messageId": id.to_string(),
                "command": "node.set_value",
                "nodeId": 39,
                "valueId": {"commandClass": 51, "endpoint": 0, "property": "targetColor"},
                "value": {"blue": 255, "coldWhite": 0, "green": 76, "red": 255, "warmWhite": 0},
                "options": {"transitionDuration": "default"}
            })
        );
    }

    #[test]
    fn options_are_omitted_when_absent() {
        let command = SetValueCommand::new(39, color_target(), CommandValue::Switch(true));
        let message = command.to_message(Uuid::nil()).unwrap();
        assert!(message.get("options").is_none());
        assert_eq!(message["value"], true);
        assert_eq!(command.transition(), None);
    }

    #[test]
    fn property_key_is_forwarded() {
        let target = color_target().with_property_key(2, "Red");
        let command = SetValueCommand::new(5, target, CommandValue::Level(10));
        let args = serde_json::to_value(command.value_id_args(true)).unwrap();
        assert_eq!(
            args,
            json!({
                "nodeId": 5,
                "commandClass": 51,
                "endpoint": 0,
                "property": "targetColor",
                "propertyKey": 2
            })
        );
    }

    #[test]
    fn scaling_black_is_identity() {
        let payload: ColorPayload = [(ColorChannel::Red, 0), (ColorChannel::Green, 0)]
            .into_iter()
            .collect();
        assert_eq!(payload.scaled_to(200), payload);
        assert_eq!(payload.max_value(), 0);
    }

    #[test]
    fn command_value_parses_back() {
        let value: CommandValue = serde_json::from_value(json!({"warmWhite": 128})).unwrap();
        let CommandValue::Color(payload) = value else {
            panic!("expected color payload");
        };
        assert_eq!(payload.get(ColorChannel::WarmWhite), Some(128));
        assert_eq!(
            serde_json::from_value::<CommandValue>(json!(99)).unwrap(),
            CommandValue::Level(99)
        );
    }
}
