// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Z-Wave command class identifiers used by lights.

use std::fmt;

/// A Z-Wave command class identifier.
///
/// Only the classes a light is built from have named constants; any other
/// identifier is carried through untouched.
///
/// # Examples
///
/// ```
/// use zwave_light::value::CommandClass;
///
/// assert_eq!(CommandClass::SWITCH_MULTILEVEL.id(), 38);
/// assert_eq!(CommandClass::SWITCH_COLOR.name(), "Color Switch");
/// assert_eq!(CommandClass::new(112).name(), "Unknown");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CommandClass(u8);

impl CommandClass {
    /// Binary Switch (on/off).
    pub const SWITCH_BINARY: Self = Self(0x25);

    /// Multilevel Switch (dimmer level).
    pub const SWITCH_MULTILEVEL: Self = Self(0x26);

    /// Color Switch (per-channel color).
    pub const SWITCH_COLOR: Self = Self(0x33);

    /// Wraps a raw command class identifier.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the human-readable command class name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.0 {
            0x25 => "Binary Switch",
            0x26 => "Multilevel Switch",
            0x33 => "Color Switch",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for CommandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

impl From<u8> for CommandClass {
    fn from(id: u8) -> Self {
        Self(id)
    }
}
