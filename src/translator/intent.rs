// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turn-on requests.

use std::time::Duration;

use crate::types::{Brightness, ColorTemp, HsColor, RgbColor, RgbwColor};

/// The color part of a turn-on request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRequest {
    /// RGB channels.
    Rgb(RgbColor),
    /// RGB channels plus white.
    Rgbw(RgbwColor),
    /// Hue and saturation, sent as full-value RGB.
    Hs(HsColor),
    /// White temperature.
    ColorTemp(ColorTemp),
}

/// What the caller wants a light to do when turning it on.
///
/// Every field is optional. An empty intent just switches the light on.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zwave_light::translator::LightIntent;
/// use zwave_light::types::{Brightness, RgbColor};
///
/// let intent = LightIntent::new()
///     .with_brightness(Brightness::new(129))
///     .with_rgb(RgbColor::new(255, 76, 255))
///     .with_transition(Duration::from_secs(10));
///
/// assert_eq!(intent.brightness(), Some(Brightness::new(129)));
/// assert_eq!(intent.transition_seconds(), Some(10));
/// assert!(!intent.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightIntent {
    brightness: Option<Brightness>,
    color: Option<ColorRequest>,
    transition: Option<Duration>,
}

impl LightIntent {
    /// Creates an empty intent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Requests an RGB color.
    #[must_use]
    pub fn with_rgb(mut self, color: RgbColor) -> Self {
        self.color = Some(ColorRequest::Rgb(color));
        self
    }

    /// Requests an RGBW color.
    #[must_use]
    pub fn with_rgbw(mut self, color: RgbwColor) -> Self {
        self.color = Some(ColorRequest::Rgbw(color));
        self
    }

    /// Requests a hue/saturation color.
    #[must_use]
    pub fn with_hs(mut self, color: HsColor) -> Self {
        self.color = Some(ColorRequest::Hs(color));
        self
    }

    /// Requests a color temperature.
    #[must_use]
    pub fn with_color_temp(mut self, color_temp: ColorTemp) -> Self {
        self.color = Some(ColorRequest::ColorTemp(color_temp));
        self
    }

    /// Requests a transition time. Sub-second parts are dropped.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Returns the requested brightness.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the requested color.
    #[must_use]
    pub const fn color(&self) -> Option<ColorRequest> {
        self.color
    }

    /// Returns the requested transition in whole seconds, saturating.
    #[must_use]
    pub fn transition_seconds(&self) -> Option<u32> {
        self.transition
            .map(|d| u32::try_from(d.as_secs()).unwrap_or(u32::MAX))
    }

    /// Returns `true` if nothing but "on" is requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.brightness.is_none() && self.color.is_none() && self.transition.is_none()
    }
}
