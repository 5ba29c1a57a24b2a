// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel cache to presentation state.

use crate::capabilities::{LightCapabilities, PrimarySwitch};
use crate::state::{ChannelCache, LightState};
use crate::types::{Brightness, ColorMode, RgbColor, RgbwColor};
use crate::value::ColorChannel;

use super::commands::lit_brightness;

/// Derives a light's state from its cached channel values.
///
/// The whole snapshot is evaluated on every call. Unknown channels take no
/// part in mode selection and read as 0 in reported colors.
///
/// Mode precedence:
///
/// 1. `ColorTemp` when both whites exist, one is lit and RGB is dark
/// 2. `Hs` (or `Rgb`) when any RGB channel is lit, `Rgbw` on RGBW endpoints
/// 3. `Rgbw` when only the white channel of an RGBW endpoint is lit
/// 4. `Brightness` for dimmers, otherwise `OnOff`
///
/// # Examples
///
/// ```
/// use zwave_light::{CapabilitiesBuilder, derive_state};
/// use zwave_light::state::{ChannelCache, ChannelChange};
/// use zwave_light::types::{ColorMode, ColorTemp, LevelRange};
/// use zwave_light::value::ColorChannel;
///
/// let caps = CapabilitiesBuilder::new(39, 0)
///     .with_level_range(LevelRange::MULTILEVEL)
///     .with_rgb()
///     .with_white_pair()
///     .build()
///     .unwrap();
///
/// let mut cache = ChannelCache::new();
/// cache.apply(&ChannelChange::Level(Some(99)));
/// cache.apply(&ChannelChange::Channel { channel: ColorChannel::WarmWhite, value: Some(20) });
/// cache.apply(&ChannelChange::Channel { channel: ColorChannel::ColdWhite, value: Some(235) });
///
/// let state = derive_state(&cache, &caps);
/// assert_eq!(state.is_on, Some(true));
/// assert_eq!(state.brightness.unwrap().value(), 255);
/// assert_eq!(state.color_mode, ColorMode::ColorTemp);
/// assert_eq!(state.color_temp, Some(ColorTemp::new(170)));
/// ```
#[must_use]
pub fn derive_state(cache: &ChannelCache, capabilities: &LightCapabilities) -> LightState {
    let lit = |channel: ColorChannel| {
        capabilities.has_channel(channel) && cache.channel(channel).is_some_and(|v| v > 0)
    };
    let rgb_lit = capabilities.supports_rgb()
        && [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue]
            .into_iter()
            .any(lit);
    let white_lit = lit(ColorChannel::WarmWhite) || lit(ColorChannel::ColdWhite);
    let rgbw_white = capabilities.rgbw_white();

    let color_mode = if capabilities.supports_color_temp() && white_lit && !rgb_lit {
        ColorMode::ColorTemp
    } else if rgb_lit {
        rgbw_white.map_or(capabilities.rgb_mode(), |_| ColorMode::Rgbw)
    } else if rgbw_white.is_some() && white_lit {
        ColorMode::Rgbw
    } else if capabilities.level_range().is_some() {
        ColorMode::Brightness
    } else {
        ColorMode::OnOff
    };

    let (is_on, brightness) = match capabilities.primary() {
        PrimarySwitch::Level { range, .. } => (
            cache.level().map(|level| level > range.min()),
            cache.level().map(|level| Brightness::from_native(level, *range)),
        ),
        PrimarySwitch::Binary { .. } => {
            let brightness = capabilities.color().and_then(|point| {
                cache.switch().map(|on| {
                    if on {
                        Brightness::new(lit_brightness(point, cache).unwrap_or(u8::MAX))
                    } else {
                        Brightness::MIN
                    }
                })
            });
            (cache.switch(), brightness)
        }
    };

    let mut state = LightState {
        is_on,
        brightness,
        color_mode,
        ..LightState::default()
    };

    let channel = |c: ColorChannel| cache.channel(c).unwrap_or(0);
    match color_mode {
        ColorMode::ColorTemp => {
            state.color_temp = capabilities.mireds_range().from_white_mix(
                channel(ColorChannel::WarmWhite),
                channel(ColorChannel::ColdWhite),
            );
        }
        ColorMode::Hs | ColorMode::Rgb | ColorMode::Rgbw => {
            let rgb = RgbColor::new(
                channel(ColorChannel::Red),
                channel(ColorChannel::Green),
                channel(ColorChannel::Blue),
            );
            state.rgb_color = Some(rgb);
            state.hs_color = Some(rgb.to_hs());
            if let Some(white) = rgbw_white {
                state.rgbw_color = Some(RgbwColor::new(
                    rgb.red(),
                    rgb.green(),
                    rgb.blue(),
                    channel(white),
                ));
            }
        }
        ColorMode::Brightness | ColorMode::OnOff => {}
    }

    state
}
