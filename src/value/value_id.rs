// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value point identifiers and metadata in the Z-Wave JS wire shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::types::LevelRange;

use super::CommandClass;

/// Name of the transition option in `valueChangeOptions`.
pub const TRANSITION_DURATION: &str = "transitionDuration";

/// A property or property key, which Z-Wave JS sends as a string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    /// Numeric property (configuration parameters, color component ids).
    Number(u32),
    /// Named property (`"targetValue"`, `"currentColor"`).
    Name(String),
}

impl Property {
    /// Returns the name, if this is a named property.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Number(_) => None,
        }
    }

    /// Returns the number, if this is a numeric property.
    #[must_use]
    pub const fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Property {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<u32> for Property {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

/// Declared type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Numeric value.
    Number,
    /// Boolean value.
    Boolean,
    /// String value.
    String,
    /// Untyped value (combined color objects).
    Any,
    /// Color value.
    Color,
    /// Duration value.
    Duration,
    /// Any type this crate does not interpret.
    #[serde(other)]
    Other,
}

/// Metadata describing how a value may be read and written.
///
/// # Examples
///
/// ```
/// use zwave_light::value::ValueMetadata;
///
/// let metadata: ValueMetadata = serde_json::from_str(r#"{
///     "type": "number", "min": 0, "max": 99,
///     "readable": true, "writeable": true,
///     "label": "Target value",
///     "valueChangeOptions": ["transitionDuration"]
/// }"#).unwrap();
///
/// assert!(metadata.supports_transition());
/// assert_eq!(metadata.level_range("targetValue").unwrap().max(), 99);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMetadata {
    /// Declared value type.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Whether the value can be read.
    #[serde(default = "default_true")]
    pub readable: bool,
    /// Whether the value can be written.
    #[serde(default = "default_true")]
    pub writeable: bool,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Lower numeric bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper numeric bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Options a set-value call for this value accepts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_change_options: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ValueMetadata {
    /// Metadata of a writeable value of the given type, with no bounds.
    #[must_use]
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            readable: true,
            writeable: true,
            label: None,
            min: None,
            max: None,
            value_change_options: Vec::new(),
        }
    }

    /// Sets the numeric bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Advertises transition support.
    #[must_use]
    pub fn with_transition(mut self) -> Self {
        if !self.supports_transition() {
            self.value_change_options
                .push(TRANSITION_DURATION.to_string());
        }
        self
    }

    /// Returns `true` if set-value calls accept a transition duration.
    #[must_use]
    pub fn supports_transition(&self) -> bool {
        self.value_change_options
            .iter()
            .any(|o| o == TRANSITION_DURATION)
    }

    /// Interprets the numeric bounds as a native level scale.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if the value is not numeric, a bound is
    /// missing, or the bounds do not form a usable level scale.
    pub fn level_range(&self, property: &str) -> Result<LevelRange, MetadataError> {
        if self.value_type != ValueType::Number {
            return Err(MetadataError::UnexpectedType {
                property: property.to_string(),
                actual: format!("{:?}", self.value_type).to_lowercase(),
            });
        }
        let min = self.min.ok_or_else(|| MetadataError::MissingBound {
            property: property.to_string(),
            bound: "min",
        })?;
        let max = self.max.ok_or_else(|| MetadataError::MissingBound {
            property: property.to_string(),
            bound: "max",
        })?;
        let invalid = || MetadataError::InvalidBounds {
            property: property.to_string(),
            min,
            max,
        };
        let native_min = u8::try_from(min).map_err(|_| invalid())?;
        let native_max = u8::try_from(max).map_err(|_| invalid())?;
        LevelRange::new(native_min, native_max).map_err(|_| invalid())
    }
}

/// Address and description of one value point on a node.
///
/// The owning node is not part of the id; it travels alongside it (see
/// [`LightCapabilities`](crate::LightCapabilities) and
/// [`SetValueCommand`](crate::command::SetValueCommand)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueId {
    /// Human-readable command class name.
    pub command_class_name: String,
    /// Command class identifier.
    pub command_class: CommandClass,
    /// Endpoint index (0 is the root device).
    pub endpoint: u8,
    /// Property within the command class.
    pub property: Property,
    /// Property name as reported by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Sub-key within the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_key: Option<Property>,
    /// Sub-key name as reported by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_key_name: Option<String>,
    /// Command class version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_version: Option<u8>,
    /// Value metadata.
    pub metadata: ValueMetadata,
    /// Value at discovery time, if the controller included it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ValueId {
    /// Creates a value id for a named property.
    #[must_use]
    pub fn new(
        command_class: CommandClass,
        endpoint: u8,
        property: &str,
        metadata: ValueMetadata,
    ) -> Self {
        Self {
            command_class_name: command_class.name().to_string(),
            command_class,
            endpoint,
            property: Property::from(property),
            property_name: Some(property.to_string()),
            property_key: None,
            property_key_name: None,
            cc_version: None,
            metadata,
            value: None,
        }
    }

    /// Sets the property sub-key.
    #[must_use]
    pub fn with_property_key(mut self, key: u32, name: impl Into<String>) -> Self {
        self.property_key = Some(Property::Number(key));
        self.property_key_name = Some(name.into());
        self
    }

    /// Sets the discovered value.
    #[must_use]
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns `true` if this id addresses `property` of `command_class`.
    #[must_use]
    pub fn is(&self, command_class: CommandClass, property: &str) -> bool {
        self.command_class == command_class && self.property.as_name() == Some(property)
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.command_class.id(),
            self.endpoint,
            self.property
        )?;
        if let Some(key) = &self.property_key {
            write!(f, "-{key}")?;
        }
        Ok(())
    }
}
