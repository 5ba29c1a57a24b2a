// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cache slot changes extracted from value events.
//!
//! A [`ValueUpdate`] addresses a value point; a [`ChannelChange`] addresses
//! the cache slot that point feeds. Only `currentValue` of the two switch
//! classes and `currentColor` of the Color Switch produce changes.
//! Target values and anything else are ignored.
//!
//! A `null` or mistyped new value becomes `None`, which marks the slot
//! unknown rather than failing.
//!
//! # Examples
//!
//! ```
//! use zwave_light::event::ValueUpdate;
//! use zwave_light::state::ChannelChange;
//! use zwave_light::value::{ColorChannel, CommandClass};
//!
//! let update = ValueUpdate::new(
//!     CommandClass::SWITCH_COLOR, 0, "currentColor", serde_json::json!(235),
//! ).with_property_key(1);
//!
//! assert_eq!(
//!     ChannelChange::from_update(&update),
//!     vec![ChannelChange::Channel { channel: ColorChannel::ColdWhite, value: Some(235) }]
//! );
//! ```

use crate::event::ValueUpdate;
use crate::value::{CURRENT_COLOR, CURRENT_VALUE, ColorChannel, CommandClass, ValueId};

/// A change to one slot of a [`ChannelCache`](super::ChannelCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelChange {
    /// Multilevel switch level (native scale).
    Level(Option<u8>),
    /// Binary switch state.
    Switch(Option<bool>),
    /// One color channel (0-255).
    Channel {
        /// The channel.
        channel: ColorChannel,
        /// New value, `None` if unknown.
        value: Option<u8>,
    },
}

impl ChannelChange {
    /// Extracts the cache changes an update carries.
    ///
    /// Per-channel `currentColor` updates yield one change. A combined
    /// `currentColor` object (no property key) yields one change per
    /// channel it contains.
    #[must_use]
    pub fn from_update(update: &ValueUpdate) -> Vec<Self> {
        classify(
            update.command_class,
            update.property.as_name(),
            update.property_key.as_ref().map(|k| k.as_number()),
            update.new_value.as_ref(),
        )
    }

    /// Extracts the cache changes a discovered value id seeds.
    #[must_use]
    pub fn from_value_id(value_id: &ValueId) -> Vec<Self> {
        classify(
            value_id.command_class,
            value_id.property.as_name(),
            value_id.property_key.as_ref().map(|k| k.as_number()),
            value_id.value.as_ref().filter(|v| !v.is_null()),
        )
    }
}

/// `key` is `None` when absent, `Some(None)` when present but not numeric.
fn classify(
    command_class: CommandClass,
    property: Option<&str>,
    key: Option<Option<u32>>,
    value: Option<&serde_json::Value>,
) -> Vec<ChannelChange> {
    match (command_class, property) {
        (CommandClass::SWITCH_MULTILEVEL, Some(CURRENT_VALUE)) => {
            vec![ChannelChange::Level(value.and_then(as_byte))]
        }
        (CommandClass::SWITCH_BINARY, Some(CURRENT_VALUE)) => {
            let state = value.and_then(serde_json::Value::as_bool);
            if state.is_none() && value.is_some() {
                tracing::warn!(value = ?value, "Unexpected binary switch value");
            }
            vec![ChannelChange::Switch(state)]
        }
        (CommandClass::SWITCH_COLOR, Some(CURRENT_COLOR)) => match key {
            Some(key) => key
                .and_then(ColorChannel::from_property_key)
                .map(|channel| ChannelChange::Channel {
                    channel,
                    value: value.and_then(as_byte),
                })
                .into_iter()
                .collect(),
            None => value
                .and_then(serde_json::Value::as_object)
                .map(|object| {
                    object
                        .iter()
                        .filter_map(|(name, v)| {
                            Some(ChannelChange::Channel {
                                channel: ColorChannel::from_wire_name(name)?,
                                value: as_byte(v),
                            })
                        })
                        .collect()
                })
                .unwrap_or_default(),
        },
        _ => Vec::new(),
    }
}

fn as_byte(value: &serde_json::Value) -> Option<u8> {
    let byte = value.as_u64().and_then(|n| u8::try_from(n).ok());
    if byte.is_none() && !value.is_null() {
        tracing::warn!(value = %value, "Ignoring non-byte channel value");
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{TARGET_VALUE, ValueMetadata, ValueType};
    use serde_json::json;

    #[test]
    fn level_update() {
        let update = ValueUpdate::new(CommandClass::SWITCH_MULTILEVEL, 0, CURRENT_VALUE, json!(99));
        assert_eq!(
            ChannelChange::from_update(&update),
            vec![ChannelChange::Level(Some(99))]
        );
    }

    #[test]
    fn binary_update() {
        let update = ValueUpdate::new(CommandClass::SWITCH_BINARY, 0, CURRENT_VALUE, json!(true));
        assert_eq!(
            ChannelChange::from_update(&update),
            vec![ChannelChange::Switch(Some(true))]
        );
    }

    #[test]
    fn null_and_mistyped_values_are_unknown() {
        let null = ValueUpdate::new(CommandClass::SWITCH_COLOR, 0, CURRENT_COLOR, json!(null))
            .with_property_key(2);
        let text = ValueUpdate::new(CommandClass::SWITCH_COLOR, 0, CURRENT_COLOR, json!("red"))
            .with_property_key(2);
        let big = ValueUpdate::new(CommandClass::SWITCH_MULTILEVEL, 0, CURRENT_VALUE, json!(300));

        let red_unknown = vec![ChannelChange::Channel {
            channel: ColorChannel::Red,
            value: None,
        }];
        assert_eq!(ChannelChange::from_update(&null), red_unknown);
        assert_eq!(ChannelChange::from_update(&text), red_unknown);
        assert_eq!(
            ChannelChange::from_update(&big),
            vec![ChannelChange::Level(None)]
        );
    }

    #[test]
    fn unknown_color_components_are_ignored() {
        // Amber
        let update = ValueUpdate::new(CommandClass::SWITCH_COLOR, 0, CURRENT_COLOR, json!(10))
            .with_property_key(5);
        assert!(ChannelChange::from_update(&update).is_empty());
    }

    #[test]
    fn combined_color_object() {
        let update = ValueUpdate::new(
            CommandClass::SWITCH_COLOR,
            0,
            CURRENT_COLOR,
            json!({"red": 255, "green": 76, "blue": 255, "amber": 3}),
        );
        let changes = ChannelChange::from_update(&update);
        assert_eq!(changes.len(), 3);
        assert!(changes.contains(&ChannelChange::Channel {
            channel: ColorChannel::Green,
            value: Some(76),
        }));
    }

    #[test]
    fn target_values_are_ignored() {
        let update = ValueUpdate::new(CommandClass::SWITCH_MULTILEVEL, 0, TARGET_VALUE, json!(50));
        assert!(ChannelChange::from_update(&update).is_empty());
    }

    #[test]
    fn seeds_from_discovered_value() {
        let id = ValueId::new(
            CommandClass::SWITCH_MULTILEVEL,
            0,
            CURRENT_VALUE,
            ValueMetadata::new(ValueType::Number).with_bounds(0, 99),
        )
        .with_value(json!(22));
        assert_eq!(
            ChannelChange::from_value_id(&id),
            vec![ChannelChange::Level(Some(22))]
        );
    }
}
