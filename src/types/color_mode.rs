// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color modes a light can be in.

use std::fmt;

/// The representation a light's color state is currently expressed in.
///
/// A light supports one or more modes (see
/// [`LightCapabilities::supported_color_modes`](crate::LightCapabilities::supported_color_modes))
/// and is in exactly one of them at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Switchable only.
    #[serde(rename = "onoff")]
    OnOff,
    /// Dimmable, no color.
    Brightness,
    /// White temperature from the warm/cold channel mix.
    ColorTemp,
    /// Hue/saturation from the RGB channels.
    Hs,
    /// RGB channels reported as-is.
    Rgb,
    /// RGB channels plus one white channel.
    Rgbw,
}

impl ColorMode {
    /// Returns the mode name as used by home-automation front ends.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnOff => "onoff",
            Self::Brightness => "brightness",
            Self::ColorTemp => "color_temp",
            Self::Hs => "hs",
            Self::Rgb => "rgb",
            Self::Rgbw => "rgbw",
        }
    }

}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
