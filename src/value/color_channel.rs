// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color switch channels.

use std::fmt;

/// One channel of a Color Switch.
///
/// Inbound events address a channel by its numeric property key
/// (`currentColor` / key 2 is red); outbound `targetColor` payloads use the
/// camel-case name (`"red"`, `"warmWhite"`).
///
/// # Examples
///
/// ```
/// use zwave_light::value::ColorChannel;
///
/// assert_eq!(ColorChannel::from_property_key(0), Some(ColorChannel::WarmWhite));
/// assert_eq!(ColorChannel::Red.property_key(), 2);
/// assert_eq!(ColorChannel::ColdWhite.wire_name(), "coldWhite");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ColorChannel {
    /// Warm white LED.
    WarmWhite,
    /// Cold white LED.
    ColdWhite,
    /// Red LED.
    Red,
    /// Green LED.
    Green,
    /// Blue LED.
    Blue,
}

impl ColorChannel {
    /// All channels, in property key order.
    pub const ALL: [Self; 5] = [
        Self::WarmWhite,
        Self::ColdWhite,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    /// Returns the Color Switch component id used as property key.
    #[must_use]
    pub const fn property_key(&self) -> u32 {
        match self {
            Self::WarmWhite => 0,
            Self::ColdWhite => 1,
            Self::Red => 2,
            Self::Green => 3,
            Self::Blue => 4,
        }
    }

    /// Looks a channel up by its component id.
    ///
    /// Components the translator does not drive (amber, cyan, purple,
    /// indexed color) yield `None`.
    #[must_use]
    pub const fn from_property_key(key: u32) -> Option<Self> {
        match key {
            0 => Some(Self::WarmWhite),
            1 => Some(Self::ColdWhite),
            2 => Some(Self::Red),
            3 => Some(Self::Green),
            4 => Some(Self::Blue),
            _ => None,
        }
    }

    /// Returns the name used in combined color objects.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::WarmWhite => "warmWhite",
            Self::ColdWhite => "coldWhite",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Looks a channel up by its combined-object name.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_name() == name)
    }

}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
