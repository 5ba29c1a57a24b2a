// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation state of a light.

use crate::types::{Brightness, ColorMode, ColorTemp, HsColor, RgbColor, RgbwColor};

/// What a light looks like, derived from its channel cache.
///
/// `None` means the value is unknown, or does not apply in the active
/// [`ColorMode`]: a light in `ColorTemp` mode has no RGB attributes, and a
/// light in `Hs` mode has no temperature.
///
/// # Examples
///
/// ```
/// use zwave_light::state::LightState;
/// use zwave_light::types::ColorMode;
///
/// let state = LightState::default();
/// assert_eq!(state.is_on, None);
/// assert_eq!(state.color_mode, ColorMode::OnOff);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LightState {
    /// Whether the light is on.
    pub is_on: Option<bool>,
    /// Brightness on the 0-255 scale.
    pub brightness: Option<Brightness>,
    /// The active color mode.
    pub color_mode: ColorMode,
    /// Color temperature, in `ColorTemp` mode.
    pub color_temp: Option<ColorTemp>,
    /// Hue and saturation, in `Hs`, `Rgb` and `Rgbw` modes.
    pub hs_color: Option<HsColor>,
    /// Raw RGB channels, in `Hs`, `Rgb` and `Rgbw` modes.
    pub rgb_color: Option<RgbColor>,
    /// RGB plus white, in `Rgbw` mode.
    pub rgbw_color: Option<RgbwColor>,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            is_on: None,
            brightness: None,
            color_mode: ColorMode::OnOff,
            color_temp: None,
            hs_color: None,
            rgb_color: None,
            rgbw_color: None,
        }
    }
}
