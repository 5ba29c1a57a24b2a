// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness on the presentation scale and its device-native counterpart.
//!
//! Lights present brightness as 0-255. Z-Wave multilevel switches use their
//! own bounded integer scale, usually 0-99, described by a [`LevelRange`].

use std::fmt;

use crate::error::ValueError;

/// Brightness on the 0-255 presentation scale.
///
/// # Examples
///
/// ```
/// use zwave_light::types::{Brightness, LevelRange};
///
/// let range = LevelRange::MULTILEVEL;
/// assert_eq!(Brightness::new(129).to_native(range), 50);
/// assert_eq!(Brightness::MAX.to_native(range), 99);
/// assert_eq!(Brightness::from_native(22, range).value(), 57);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Brightness(u8);

impl Brightness {
    /// Off.
    pub const MIN: Self = Self(0);

    /// Full brightness.
    pub const MAX: Self = Self(255);

    /// Creates a brightness value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the 0-255 value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Converts to the device-native level.
    ///
    /// Zero maps to the range minimum. Any other value maps to
    /// `round(value / 255 * max)`, kept at least 1 so a dim request never
    /// reads as off, and clamped into the range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_native(&self, range: LevelRange) -> u8 {
        if self.0 == 0 {
            return range.min;
        }
        let scaled = (f32::from(self.0) / 255.0 * f32::from(range.max)).round() as u8;
        scaled.clamp(range.min.max(1).min(range.max), range.max)
    }

    /// Converts a device-native level back to the presentation scale.
    ///
    /// Levels at or below the range minimum read as 0, the range maximum
    /// reads as 255.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_native(native: u8, range: LevelRange) -> Self {
        if native <= range.min {
            return Self::MIN;
        }
        let native = native.min(range.max);
        let scaled = (f32::from(native) / f32::from(range.max) * 255.0).round() as u8;
        Self(scaled.max(1))
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Bounds of a device-native level scale.
///
/// Multilevel switches report `min`/`max` in their value metadata; the
/// common case is [`LevelRange::MULTILEVEL`] (0-99). The wire value 255 is
/// reserved by the protocol to mean "restore the previous level", so `max`
/// stays below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawLevelRange")]
pub struct LevelRange {
    min: u8,
    max: u8,
}

#[derive(serde::Deserialize)]
struct RawLevelRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawLevelRange> for LevelRange {
    type Error = ValueError;

    fn try_from(raw: RawLevelRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl LevelRange {
    /// The standard multilevel switch range, 0-99.
    pub const MULTILEVEL: Self = Self { min: 0, max: 99 };

    /// Creates a level range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `max` is not above `min` or
    /// reaches the reserved value 255.
    pub fn new(min: u8, max: u8) -> Result<Self, ValueError> {
        if max <= min || max == u8::MAX {
            return Err(ValueError::OutOfRange {
                min: u32::from(min) + 1,
                max: u32::from(u8::MAX) - 1,
                actual: u32::from(max),
            });
        }
        Ok(Self { min, max })
    }

    /// Returns the lowest native level (off).
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// Returns the highest native level.
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::MULTILEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_round_trip() {
        for max in [1_u8, 50, 99, 100, 254] {
            let range = LevelRange::new(0, max).unwrap();
            assert_eq!(Brightness::MIN.to_native(range), 0);
            assert_eq!(Brightness::MAX.to_native(range), max);
            assert_eq!(Brightness::from_native(0, range), Brightness::MIN);
            assert_eq!(Brightness::from_native(max, range), Brightness::MAX);
            assert_eq!(
                Brightness::from_native(Brightness::MAX.to_native(range), range),
                Brightness::MAX
            );
        }
    }

    #[test]
    fn to_native_is_monotonic() {
        let range = LevelRange::MULTILEVEL;
        let mut previous = 0;
        for v in 0..=255 {
            let native = Brightness::new(v).to_native(range);
            assert!(native >= previous, "{v} mapped below {previous}");
            previous = native;
        }
    }

    #[test]
    fn from_native_is_monotonic() {
        let range = LevelRange::MULTILEVEL;
        let mut previous = Brightness::MIN;
        for native in 0..=99 {
            let b = Brightness::from_native(native, range);
            assert!(b >= previous);
            previous = b;
        }
    }

    #[test]
    fn dim_request_never_turns_off() {
        assert_eq!(Brightness::new(1).to_native(LevelRange::MULTILEVEL), 1);
    }

    #[test]
    fn known_conversions() {
        let range = LevelRange::MULTILEVEL;
        assert_eq!(Brightness::new(129).to_native(range), 50);
        assert_eq!(Brightness::from_native(22, range).value(), 57);
        assert_eq!(Brightness::from_native(99, range).value(), 255);
    }

    #[test]
    fn native_above_max_is_clamped() {
        let range = LevelRange::MULTILEVEL;
        assert_eq!(Brightness::from_native(120, range), Brightness::MAX);
    }

    #[test]
    fn nonzero_min_is_respected() {
        let range = LevelRange::new(5, 99).unwrap();
        assert_eq!(Brightness::MIN.to_native(range), 5);
        assert_eq!(Brightness::new(2).to_native(range), 5);
        assert_eq!(Brightness::from_native(5, range), Brightness::MIN);
    }

    #[test]
    fn invalid_ranges() {
        assert!(LevelRange::new(10, 10).is_err());
        assert!(LevelRange::new(20, 10).is_err());
        assert!(LevelRange::new(0, 255).is_err());
    }

    #[test]
    fn deserialized_range_is_validated() {
        let range: LevelRange = serde_json::from_str(r#"{"min": 1, "max": 99}"#).unwrap();
        assert_eq!(range, LevelRange::new(1, 99).unwrap());

        assert!(serde_json::from_str::<LevelRange>(r#"{"min": 50, "max": 10}"#).is_err());
        assert!(serde_json::from_str::<LevelRange>(r#"{"min": 0, "max": 255}"#).is_err());
    }
}
