// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature and hue/saturation types.
//!
//! Z-Wave color switches have no color temperature property. A temperature
//! is emulated by mixing the warm-white and cold-white channels linearly
//! across the light's [`MiredsRange`].

use std::fmt;

use crate::error::ValueError;

/// Color temperature in mireds.
///
/// Lower values are cooler (bluer), higher values warmer.
///
/// # Examples
///
/// ```
/// use zwave_light::types::ColorTemp;
///
/// let ct = ColorTemp::new(250);
/// assert_eq!(ct.to_kelvin(), 4000);
/// assert_eq!(ColorTemp::from_kelvin(2700).unwrap().value(), 370);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ColorTemp(u16);

impl ColorTemp {
    /// Creates a color temperature from mireds.
    #[must_use]
    pub const fn new(mireds: u16) -> Self {
        Self(mireds)
    }

    /// Returns the value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u32 {
        1_000_000 / u32::from(self.0.max(1))
    }

    /// Creates a color temperature from a Kelvin value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for Kelvin values below 16 (which
    /// would not fit in mireds) or zero.
    pub fn from_kelvin(kelvin: u32) -> Result<Self, ValueError> {
        if kelvin < 16 {
            return Err(ValueError::OutOfRange {
                min: 16,
                max: 1_000_000,
                actual: kelvin,
            });
        }
        let mireds = u16::try_from(1_000_000 / kelvin).map_err(|_| ValueError::OutOfRange {
            min: 16,
            max: 1_000_000,
            actual: kelvin,
        })?;
        Ok(Self(mireds))
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mireds", self.0)
    }
}

impl From<u16> for ColorTemp {
    fn from(mireds: u16) -> Self {
        Self(mireds)
    }
}

/// The color temperature span a white-mixing light covers.
///
/// `min` is the coolest temperature (cold white only), `max` the warmest
/// (warm white only).
///
/// # Examples
///
/// ```
/// use zwave_light::types::{ColorTemp, MiredsRange};
///
/// let range = MiredsRange::default();
/// let (warm, cold) = range.to_white_mix(ColorTemp::new(170), 255);
/// assert_eq!((warm, cold), (20, 235));
/// assert_eq!(range.from_white_mix(warm, cold), Some(ColorTemp::new(170)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawMiredsRange")]
pub struct MiredsRange {
    min: u16,
    max: u16,
}

#[derive(serde::Deserialize)]
struct RawMiredsRange {
    min: u16,
    max: u16,
}

impl TryFrom<RawMiredsRange> for MiredsRange {
    type Error = ValueError;

    fn try_from(raw: RawMiredsRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl MiredsRange {
    /// The range assumed for Z-Wave white-mixing lights (~6500K to ~2700K).
    pub const DEFAULT: Self = Self { min: 153, max: 370 };

    /// Creates a mireds range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMiredsRange` if `min` is not below `max`
    /// or `min` is zero.
    pub fn new(min: u16, max: u16) -> Result<Self, ValueError> {
        if min == 0 || min >= max {
            return Err(ValueError::InvalidMiredsRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Coolest supported temperature.
    #[must_use]
    pub const fn min(&self) -> ColorTemp {
        ColorTemp(self.min)
    }

    /// Warmest supported temperature.
    #[must_use]
    pub const fn max(&self) -> ColorTemp {
        ColorTemp(self.max)
    }

    /// Clamps a temperature into the range.
    #[must_use]
    pub fn clamp(&self, ct: ColorTemp) -> ColorTemp {
        ColorTemp(ct.0.clamp(self.min, self.max))
    }

    /// Splits `total` intensity into `(warm, cold)` white channel values.
    ///
    /// The temperature is clamped into the range first. The two channels
    /// always sum to `total`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_white_mix(&self, ct: ColorTemp, total: u8) -> (u8, u8) {
        let ct = self.clamp(ct).0;
        let span = f32::from(self.max - self.min);
        let cold = (f32::from(self.max - ct) / span * f32::from(total)).round() as u8;
        let cold = cold.min(total);
        (total - cold, cold)
    }

    /// Recovers the temperature from a white channel mix.
    ///
    /// Only the ratio between the channels matters, so a mix scaled by
    /// brightness yields the same temperature. Returns `None` when both
    /// channels are off.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_white_mix(&self, warm: u8, cold: u8) -> Option<ColorTemp> {
        let total = u16::from(warm) + u16::from(cold);
        if total == 0 {
            return None;
        }
        let span = f32::from(self.max - self.min);
        let mireds = (f32::from(self.max) - f32::from(cold) / f32::from(total) * span).round();
        Some(self.clamp(ColorTemp(mireds as u16)))
    }
}

impl Default for MiredsRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hue/saturation color.
///
/// Hue is in degrees (0-360), saturation in percent (0-100).
///
/// # Examples
///
/// ```
/// use zwave_light::types::{HsColor, RgbColor};
///
/// let hs = HsColor::new(300.0, 100.0).unwrap();
/// assert_eq!(hs.to_rgb(), RgbColor::new(255, 0, 255));
/// assert!(HsColor::new(400.0, 50.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HsColor {
    hue: f32,
    saturation: f32,
}

impl HsColor {
    /// Maximum hue value (wraps at 360).
    pub const MAX_HUE: f32 = 360.0;

    /// Maximum saturation value.
    pub const MAX_SATURATION: f32 = 100.0;

    /// Creates a hue/saturation color.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHue` or `ValueError::InvalidSaturation`
    /// when a component is outside its range.
    pub fn new(hue: f32, saturation: f32) -> Result<Self, ValueError> {
        if !(0.0..=Self::MAX_HUE).contains(&hue) {
            return Err(ValueError::InvalidHue(hue));
        }
        if !(0.0..=Self::MAX_SATURATION).contains(&saturation) {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        Ok(Self { hue, saturation })
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Returns the saturation in percent.
    #[must_use]
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Converts to RGB at full value.
    #[must_use]
    pub fn to_rgb(&self) -> super::RgbColor {
        super::RgbColor::from_hs(self)
    }

    pub(crate) const fn from_parts(hue: f32, saturation: f32) -> Self {
        Self { hue, saturation }
    }
}

impl fmt::Display for HsColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HS({:.1}, {:.1}%)", self.hue, self.saturation)
    }
}
