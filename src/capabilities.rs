// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light capability detection and configuration.
//!
//! A light endpoint's capabilities follow from which value points it
//! exposes. They can be detected from the value ids the controller reports
//! for a node, or assembled by hand with [`CapabilitiesBuilder`].
//!
//! # Detection
//!
//! - Multilevel Switch `targetValue` → dimmable, native bounds from metadata
//! - Binary Switch `targetValue` → on/off only (when no level point exists)
//! - Color Switch `targetColor` plus `currentColor` keys → color channels
//!
//! An endpoint with neither a level nor a binary switch point is not a
//! light.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::types::{ColorMode, LevelRange, MiredsRange};
use crate::value::{
    CURRENT_COLOR, CURRENT_VALUE, ColorChannel, CommandClass, TARGET_COLOR, TARGET_VALUE, ValueId,
    ValueMetadata, ValueType,
};

/// The point that switches the light on and off.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimarySwitch {
    /// Multilevel switch: level on a bounded native scale.
    Level {
        /// The `targetValue` point.
        target: ValueId,
        /// Native bounds from the point's metadata.
        range: LevelRange,
    },
    /// Binary switch: on/off only.
    Binary {
        /// The `targetValue` point.
        target: ValueId,
    },
}

impl PrimarySwitch {
    /// Returns the point commands are written to.
    #[must_use]
    pub fn target(&self) -> &ValueId {
        match self {
            Self::Level { target, .. } | Self::Binary { target } => target,
        }
    }
}

/// The color switch point and the channels it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPoint {
    /// The `targetColor` point.
    pub target: ValueId,
    /// Channels reported through `currentColor`.
    pub channels: BTreeSet<ColorChannel>,
}

/// Capabilities of one light endpoint.
///
/// # Examples
///
/// ```
/// use zwave_light::{CapabilitiesBuilder, types::ColorMode};
///
/// let caps = CapabilitiesBuilder::new(39, 0)
///     .with_level_range(zwave_light::types::LevelRange::MULTILEVEL)
///     .with_rgb()
///     .with_white_pair()
///     .with_transition()
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     caps.supported_color_modes(),
///     vec![ColorMode::ColorTemp, ColorMode::Hs]
/// );
/// assert!(caps.supports_transition());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LightCapabilities {
    node_id: u16,
    endpoint: u8,
    primary: PrimarySwitch,
    color: Option<ColorPoint>,
    mireds_range: MiredsRange,
    rgb_mode: ColorMode,
}

impl LightCapabilities {
    /// Detects the capabilities of `endpoint` from a node's value ids.
    ///
    /// Values belonging to other endpoints are ignored.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedCapability` if the endpoint has no level or
    ///   binary switch point
    /// - `Error::InvalidDeviceMetadata` if the level point's bounds are
    ///   missing or malformed
    pub fn from_values(node_id: u16, endpoint: u8, values: &[ValueId]) -> Result<Self> {
        let on_endpoint = || values.iter().filter(move |v| v.endpoint == endpoint);

        let level = on_endpoint().find(|v| v.is(CommandClass::SWITCH_MULTILEVEL, TARGET_VALUE));
        let primary = if let Some(target) = level {
            let range = target.metadata.level_range(TARGET_VALUE)?;
            PrimarySwitch::Level {
                target: target.clone(),
                range,
            }
        } else if let Some(target) =
            on_endpoint().find(|v| v.is(CommandClass::SWITCH_BINARY, TARGET_VALUE))
        {
            PrimarySwitch::Binary {
                target: target.clone(),
            }
        } else {
            return Err(Error::unsupported("on/off or level control"));
        };

        let channels: BTreeSet<ColorChannel> = on_endpoint()
            .filter(|v| v.is(CommandClass::SWITCH_COLOR, CURRENT_COLOR))
            .filter_map(|v| v.property_key.as_ref()?.as_number())
            .filter_map(ColorChannel::from_property_key)
            .collect();

        let color = match on_endpoint().find(|v| v.is(CommandClass::SWITCH_COLOR, TARGET_COLOR)) {
            Some(target) if !channels.is_empty() => Some(ColorPoint {
                target: target.clone(),
                channels,
            }),
            Some(_) => {
                tracing::debug!(node_id, endpoint, "Color switch reports no channels");
                None
            }
            None if !channels.is_empty() => {
                tracing::warn!(node_id, endpoint, "Color channels without a writable target");
                None
            }
            None => None,
        };

        Ok(Self {
            node_id,
            endpoint,
            primary,
            color,
            mireds_range: MiredsRange::DEFAULT,
            rgb_mode: ColorMode::Hs,
        })
    }

    /// Replaces the mireds range used for white mixing.
    #[must_use]
    pub fn with_mireds_range(mut self, range: MiredsRange) -> Self {
        self.mireds_range = range;
        self
    }

    /// Reports RGB color as [`ColorMode::Rgb`] instead of [`ColorMode::Hs`].
    #[must_use]
    pub fn with_rgb_mode(mut self) -> Self {
        self.rgb_mode = ColorMode::Rgb;
        self
    }

    /// Returns the node the endpoint belongs to.
    #[must_use]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    /// Returns the endpoint index.
    #[must_use]
    pub const fn endpoint(&self) -> u8 {
        self.endpoint
    }

    /// Returns the on/off point.
    #[must_use]
    pub const fn primary(&self) -> &PrimarySwitch {
        &self.primary
    }

    /// Returns the native level bounds, if the light is dimmable.
    #[must_use]
    pub const fn level_range(&self) -> Option<LevelRange> {
        match &self.primary {
            PrimarySwitch::Level { range, .. } => Some(*range),
            PrimarySwitch::Binary { .. } => None,
        }
    }

    /// Returns the color point, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&ColorPoint> {
        self.color.as_ref()
    }

    /// Returns the mireds range used for white mixing.
    #[must_use]
    pub const fn mireds_range(&self) -> MiredsRange {
        self.mireds_range
    }

    /// Returns the mode RGB color is reported in.
    #[must_use]
    pub const fn rgb_mode(&self) -> ColorMode {
        self.rgb_mode
    }

    /// Returns `true` if the endpoint drives `channel`.
    #[must_use]
    pub fn has_channel(&self, channel: ColorChannel) -> bool {
        self.color
            .as_ref()
            .is_some_and(|c| c.channels.contains(&channel))
    }

    /// Returns `true` if the endpoint has red, green and blue channels.
    #[must_use]
    pub fn supports_rgb(&self) -> bool {
        [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue]
            .into_iter()
            .all(|c| self.has_channel(c))
    }

    /// Returns `true` if both white channels are present.
    #[must_use]
    pub fn supports_color_temp(&self) -> bool {
        self.has_channel(ColorChannel::WarmWhite) && self.has_channel(ColorChannel::ColdWhite)
    }

    /// Returns the white channel of an RGBW endpoint.
    ///
    /// An endpoint is RGBW when it has RGB and exactly one white channel.
    #[must_use]
    pub fn rgbw_white(&self) -> Option<ColorChannel> {
        if !self.supports_rgb() {
            return None;
        }
        match (
            self.has_channel(ColorChannel::WarmWhite),
            self.has_channel(ColorChannel::ColdWhite),
        ) {
            (true, false) => Some(ColorChannel::WarmWhite),
            (false, true) => Some(ColorChannel::ColdWhite),
            _ => None,
        }
    }

    /// Returns `true` if any white channel is present.
    #[must_use]
    pub fn has_white(&self) -> bool {
        self.has_channel(ColorChannel::WarmWhite) || self.has_channel(ColorChannel::ColdWhite)
    }

    /// Returns `true` if a set-value call on the primary or color point
    /// accepts a transition duration.
    #[must_use]
    pub fn supports_transition(&self) -> bool {
        self.primary.target().metadata.supports_transition()
            || self
                .color
                .as_ref()
                .is_some_and(|c| c.target.metadata.supports_transition())
    }

    /// Returns the color modes this endpoint can be in, sorted.
    #[must_use]
    pub fn supported_color_modes(&self) -> Vec<ColorMode> {
        let mut modes = BTreeSet::new();
        if self.rgbw_white().is_some() {
            modes.insert(ColorMode::Rgbw);
        } else if self.supports_rgb() {
            modes.insert(self.rgb_mode);
        }
        if self.supports_color_temp() {
            modes.insert(ColorMode::ColorTemp);
        }
        if modes.is_empty() {
            modes.insert(match self.primary {
                PrimarySwitch::Level { .. } => ColorMode::Brightness,
                PrimarySwitch::Binary { .. } => ColorMode::OnOff,
            });
        }
        modes.into_iter().collect()
    }
}

/// Builder for assembling capabilities without a discovery dump.
///
/// The builder synthesizes value ids with the metadata Z-Wave JS reports
/// for standard switches.
#[derive(Debug)]
pub struct CapabilitiesBuilder {
    node_id: u16,
    endpoint: u8,
    level: Option<LevelRange>,
    channels: BTreeSet<ColorChannel>,
    transition: bool,
    mireds_range: MiredsRange,
    rgb_mode: bool,
}

impl CapabilitiesBuilder {
    /// Creates a builder for an on/off-only endpoint.
    #[must_use]
    pub fn new(node_id: u16, endpoint: u8) -> Self {
        Self {
            node_id,
            endpoint,
            level: None,
            channels: BTreeSet::new(),
            transition: false,
            mireds_range: MiredsRange::DEFAULT,
            rgb_mode: false,
        }
    }

    /// Makes the light dimmable with the given native bounds.
    #[must_use]
    pub fn with_level_range(mut self, range: LevelRange) -> Self {
        self.level = Some(range);
        self
    }

    /// Adds red, green and blue channels.
    #[must_use]
    pub fn with_rgb(mut self) -> Self {
        self.channels
            .extend([ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue]);
        self
    }

    /// Adds both white channels.
    #[must_use]
    pub fn with_white_pair(mut self) -> Self {
        self.channels
            .extend([ColorChannel::WarmWhite, ColorChannel::ColdWhite]);
        self
    }

    /// Adds a single channel.
    #[must_use]
    pub fn with_channel(mut self, channel: ColorChannel) -> Self {
        self.channels.insert(channel);
        self
    }

    /// Advertises transition support on every writable point.
    #[must_use]
    pub fn with_transition(mut self) -> Self {
        self.transition = true;
        self
    }

    /// Sets the mireds range used for white mixing.
    #[must_use]
    pub fn with_mireds_range(mut self, range: MiredsRange) -> Self {
        self.mireds_range = range;
        self
    }

    /// Reports RGB color as [`ColorMode::Rgb`].
    #[must_use]
    pub fn with_rgb_mode(mut self) -> Self {
        self.rgb_mode = true;
        self
    }

    /// Returns the value ids a controller would report for this endpoint.
    #[must_use]
    pub fn values(&self) -> Vec<ValueId> {
        let transition = |m: ValueMetadata| {
            if self.transition {
                m.with_transition()
            } else {
                m
            }
        };
        let mut values = Vec::new();

        if let Some(range) = self.level {
            for (property, label) in [
                (TARGET_VALUE, "Target value"),
                (CURRENT_VALUE, "Current value"),
            ] {
                let mut metadata = ValueMetadata::new(ValueType::Number)
                    .with_bounds(i64::from(range.min()), i64::from(range.max()))
                    .with_label(label);
                if property == TARGET_VALUE {
                    metadata = transition(metadata);
                } else {
                    metadata.writeable = false;
                }
                values.push(ValueId::new(
                    CommandClass::SWITCH_MULTILEVEL,
                    self.endpoint,
                    property,
                    metadata,
                ));
            }
        } else {
            values.push(ValueId::new(
                CommandClass::SWITCH_BINARY,
                self.endpoint,
                TARGET_VALUE,
                transition(ValueMetadata::new(ValueType::Boolean).with_label("Target value")),
            ));
        }

        if !self.channels.is_empty() {
            values.push(ValueId::new(
                CommandClass::SWITCH_COLOR,
                self.endpoint,
                TARGET_COLOR,
                transition(ValueMetadata::new(ValueType::Any).with_label("Target Color")),
            ));
            for channel in &self.channels {
                let mut metadata = ValueMetadata::new(ValueType::Number)
                    .with_bounds(0, 255)
                    .with_label(format!("Current value ({channel})"));
                metadata.writeable = false;
                values.push(
                    ValueId::new(
                        CommandClass::SWITCH_COLOR,
                        self.endpoint,
                        CURRENT_COLOR,
                        metadata,
                    )
                    .with_property_key(channel.property_key(), channel.wire_name()),
                );
            }
        }

        values
    }

    /// Builds the capabilities.
    ///
    /// # Errors
    ///
    /// Propagates detection errors, see [`LightCapabilities::from_values`].
    pub fn build(self) -> Result<LightCapabilities> {
        let caps = LightCapabilities::from_values(self.node_id, self.endpoint, &self.values())?
            .with_mireds_range(self.mireds_range);
        Ok(if self.rgb_mode { caps.with_rgb_mode() } else { caps })
    }
}
