// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition duration attached to set-value commands.
//!
//! On the wire Z-Wave JS accepts either the literal `"default"` (let the
//! device pick its configured dimming duration) or a duration string such
//! as `"10s"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// How long a device should take to reach a new value.
///
/// # Examples
///
/// ```
/// use zwave_light::types::TransitionDuration;
///
/// let explicit = TransitionDuration::seconds(10).unwrap();
/// assert_eq!(explicit.to_string(), "10s");
/// assert_eq!(TransitionDuration::Default.to_string(), "default");
///
/// // Z-Wave durations top out at 127 minutes
/// assert!(TransitionDuration::seconds(7621).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionDuration {
    /// Use the device's configured duration.
    #[default]
    Default,
    /// An explicit duration in seconds.
    Seconds(u16),
}

impl TransitionDuration {
    /// Longest duration a Z-Wave duration field can encode (127 minutes).
    pub const MAX_SECONDS: u16 = 7620;

    /// Creates an explicit duration.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` above [`Self::MAX_SECONDS`].
    pub fn seconds(seconds: u32) -> Result<Self, ValueError> {
        match u16::try_from(seconds) {
            Ok(s) if s <= Self::MAX_SECONDS => Ok(Self::Seconds(s)),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: u32::from(Self::MAX_SECONDS),
                actual: seconds,
            }),
        }
    }

    /// Returns the explicit duration, if any.
    #[must_use]
    pub const fn as_seconds(&self) -> Option<u16> {
        match self {
            Self::Default => None,
            Self::Seconds(s) => Some(*s),
        }
    }
}

impl fmt::Display for TransitionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Seconds(s) => write!(f, "{s}s"),
        }
    }
}

impl FromStr for TransitionDuration {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Self::Default);
        }
        s.strip_suffix('s')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or(ValueError::OutOfRange {
                min: 0,
                max: u32::from(Self::MAX_SECONDS),
                actual: u32::MAX,
            })
            .and_then(Self::seconds)
    }
}

impl Serialize for TransitionDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransitionDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
