// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB and RGBW color types.

use super::HsColor;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use zwave_light::types::RgbColor;
///
/// let hs = RgbColor::new(255, 76, 255).to_hs();
/// assert_eq!(hs.hue().round(), 300.0);
/// assert_eq!(hs.saturation().round(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Converts this color to hue/saturation, discarding its value.
    #[must_use]
    pub fn to_hs(&self) -> HsColor {
        let (h, s) = rgb_to_hs(self.red, self.green, self.blue);
        HsColor::from_parts(h, s)
    }

    /// Creates a full-value RGB color from hue/saturation.
    #[must_use]
    pub fn from_hs(hs: &HsColor) -> Self {
        let (r, g, b) = hs_to_rgb(hs.hue(), hs.saturation());
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// RGB color plus a single white channel.
///
/// # Examples
///
/// ```
/// use zwave_light::types::RgbwColor;
///
/// let color = RgbwColor::from((0, 0, 0, 128));
/// assert_eq!(color.white(), 128);
/// assert_eq!(color.rgb().red(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwColor {
    rgb: RgbColor,
    white: u8,
}

impl RgbwColor {
    /// Creates a new RGBW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            rgb: RgbColor::new(red, green, blue),
            white,
        }
    }

    /// Returns the RGB part.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Returns the white channel.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }
}

impl From<(u8, u8, u8, u8)> for RgbwColor {
    fn from((red, green, blue, white): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, white)
    }
}

/// Converts RGB values to hue (0-360) and saturation (0-100).
#[allow(clippy::many_single_char_names)]
fn rgb_to_hs(r: u8, g: u8, b: u8) -> (f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    let hue = if delta < f32::EPSILON {
        0.0
    } else if (max - r).abs() < f32::EPSILON {
        let h = 60.0 * (((g - b) / delta) % 6.0);
        if h < 0.0 { h + 360.0 } else { h }
    } else if (max - g).abs() < f32::EPSILON {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    (hue, saturation)
}

/// Converts hue (0-360) and saturation (0-100) to RGB at full value.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn hs_to_rgb(h: f32, s: f32) -> (u8, u8, u8) {
    let h = h % 360.0;
    let c = s / 100.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = 1.0 - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
