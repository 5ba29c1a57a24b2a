// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intent to set-value command translation.

use std::time::Duration;

use crate::capabilities::{ColorPoint, LightCapabilities, PrimarySwitch};
use crate::command::{
    ColorPayload, CommandValue, RESTORE_PREVIOUS_LEVEL, SetValueCommand, SetValueOptions,
};
use crate::error::{Error, Result};
use crate::state::ChannelCache;
use crate::types::{MiredsRange, RgbColor, TransitionDuration};
use crate::value::{ColorChannel, ValueId};

use super::{ColorRequest, LightIntent, TranslatorConfig};

const RGB: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];
const WHITES: [ColorChannel; 2] = [ColorChannel::WarmWhite, ColorChannel::ColdWhite];

/// Translates intents into ordered set-value commands.
///
/// Pure and synchronous; the caller supplies the cache snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Creates a translator with the given configuration.
    #[must_use]
    pub const fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Builds the commands that turn a light on as `intent` describes.
    ///
    /// A color change comes first, followed by the command on the primary
    /// switch point.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedCapability` if the intent asks for a color or
    ///   brightness the endpoint cannot render
    /// - `Error::Value` if the transition exceeds the Z-Wave maximum
    pub fn turn_on_commands(
        &self,
        intent: &LightIntent,
        capabilities: &LightCapabilities,
        cache: &ChannelCache,
    ) -> Result<Vec<SetValueCommand>> {
        let transition = transition_duration(intent.transition_seconds())?;
        let node_id = capabilities.node_id();
        let mut commands = Vec::with_capacity(2);

        let mireds_range = self.config.mireds_range_for(capabilities);
        let mut changes_color = false;
        if let Some((point, payload)) = color_payload(intent, capabilities, mireds_range, cache)? {
            changes_color = payload
                .iter()
                .any(|(channel, value)| cache.channel(channel) != Some(value));
            commands.push(set_value(
                node_id,
                &point.target,
                CommandValue::Color(payload),
                transition,
            ));
        }

        let (target, value, already) = match capabilities.primary() {
            PrimarySwitch::Level { target, range } => {
                let level = intent
                    .brightness()
                    .map_or(RESTORE_PREVIOUS_LEVEL, |b| b.to_native(*range));
                let already = match intent.brightness() {
                    Some(_) => cache.level() == Some(level),
                    None => cache.level().is_some_and(|l| l > range.min()),
                };
                (target, CommandValue::Level(level), already)
            }
            PrimarySwitch::Binary { target } => (
                target,
                CommandValue::Switch(true),
                cache.switch() == Some(true),
            ),
        };

        if self.config.skip_redundant && already && transition.is_none() && !changes_color {
            tracing::debug!(
                node_id,
                endpoint = capabilities.endpoint(),
                "Light already in requested state, skipping"
            );
            return Ok(Vec::new());
        }

        commands.push(set_value(node_id, target, value, transition));
        Ok(commands)
    }

    /// Builds the command that turns a light off.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the transition exceeds the Z-Wave maximum.
    pub fn turn_off_commands(
        &self,
        transition: Option<Duration>,
        capabilities: &LightCapabilities,
    ) -> Result<Vec<SetValueCommand>> {
        let seconds = transition.map(|d| u32::try_from(d.as_secs()).unwrap_or(u32::MAX));
        let transition = transition_duration(seconds)?;
        let value = match capabilities.primary() {
            PrimarySwitch::Level { range, .. } => CommandValue::Level(range.min()),
            PrimarySwitch::Binary { .. } => CommandValue::Switch(false),
        };
        Ok(vec![set_value(
            capabilities.node_id(),
            capabilities.primary().target(),
            value,
            transition,
        )])
    }
}

/// Builds turn-on commands with the default configuration.
///
/// # Errors
///
/// See [`Translator::turn_on_commands`].
///
/// # Examples
///
/// ```
/// use zwave_light::{CapabilitiesBuilder, build_turn_on_commands};
/// use zwave_light::command::CommandValue;
/// use zwave_light::state::ChannelCache;
/// use zwave_light::translator::LightIntent;
/// use zwave_light::types::{Brightness, LevelRange};
///
/// let caps = CapabilitiesBuilder::new(39, 0)
///     .with_level_range(LevelRange::MULTILEVEL)
///     .build()
///     .unwrap();
/// let intent = LightIntent::new().with_brightness(Brightness::new(129));
///
/// let commands = build_turn_on_commands(&intent, &caps, &ChannelCache::new()).unwrap();
/// assert_eq!(commands.len(), 1);
/// assert_eq!(commands[0].value, CommandValue::Level(50));
/// ```
pub fn build_turn_on_commands(
    intent: &LightIntent,
    capabilities: &LightCapabilities,
    cache: &ChannelCache,
) -> Result<Vec<SetValueCommand>> {
    Translator::default().turn_on_commands(intent, capabilities, cache)
}

/// Builds turn-off commands with the default configuration.
///
/// # Errors
///
/// See [`Translator::turn_off_commands`].
pub fn build_turn_off_commands(
    transition: Option<Duration>,
    capabilities: &LightCapabilities,
) -> Result<Vec<SetValueCommand>> {
    Translator::default().turn_off_commands(transition, capabilities)
}

fn transition_duration(seconds: Option<u32>) -> Result<Option<TransitionDuration>> {
    Ok(seconds.map(TransitionDuration::seconds).transpose()?)
}

/// Builds a command, attaching a transition only where the point accepts
/// one.
fn set_value(
    node_id: u16,
    target: &ValueId,
    value: CommandValue,
    transition: Option<TransitionDuration>,
) -> SetValueCommand {
    let command = SetValueCommand::new(node_id, target.clone(), value);
    if target.metadata.supports_transition() {
        command.with_options(SetValueOptions::transition(
            transition.unwrap_or_default(),
        ))
    } else {
        if let Some(transition) = transition {
            tracing::debug!(
                node_id,
                value_id = %target,
                transition = %transition,
                "Point does not accept transitions, dropping"
            );
        }
        command
    }
}

/// Resolves the color write an intent needs, if any.
fn color_payload<'a>(
    intent: &LightIntent,
    capabilities: &'a LightCapabilities,
    mireds_range: MiredsRange,
    cache: &ChannelCache,
) -> Result<Option<(&'a ColorPoint, ColorPayload)>> {
    let binary = matches!(capabilities.primary(), PrimarySwitch::Binary { .. });

    let Some(request) = intent.color() else {
        return match (binary, intent.brightness(), capabilities.color()) {
            (true, Some(brightness), Some(point)) => Ok(Some((
                point,
                rescale_cached(capabilities, point, cache, brightness.value()),
            ))),
            (true, Some(_), None) => Err(Error::unsupported("brightness")),
            _ => Ok(None),
        };
    };

    let unsupported = match request {
        ColorRequest::Rgb(_) | ColorRequest::Hs(_) if !capabilities.supports_rgb() => {
            Some("rgb color")
        }
        ColorRequest::Rgbw(_) if !(capabilities.supports_rgb() && capabilities.has_white()) => {
            Some("rgbw color")
        }
        ColorRequest::ColorTemp(_) if !capabilities.supports_color_temp() => {
            Some("color temperature")
        }
        _ => None,
    };
    let point = match (unsupported, capabilities.color()) {
        (None, Some(point)) => point,
        (Some(capability), _) => return Err(Error::unsupported(capability)),
        (None, None) => return Err(Error::unsupported("color")),
    };

    let mut payload: ColorPayload = point.channels.iter().map(|c| (*c, 0)).collect();
    match request {
        ColorRequest::Rgb(rgb) => set_rgb(&mut payload, rgb),
        ColorRequest::Hs(hs) => set_rgb(&mut payload, hs.to_rgb()),
        ColorRequest::Rgbw(rgbw) => {
            set_rgb(&mut payload, rgbw.rgb());
            for white in WHITES.into_iter().filter(|w| point.channels.contains(w)) {
                payload.set(white, rgbw.white());
            }
        }
        ColorRequest::ColorTemp(color_temp) => {
            let total = if binary {
                intent
                    .brightness()
                    .map_or_else(|| lit_brightness(point, cache).unwrap_or(u8::MAX), |b| b.value())
            } else {
                u8::MAX
            };
            let (warm, cold) = mireds_range.to_white_mix(color_temp, total);
            payload.set(ColorChannel::WarmWhite, warm);
            payload.set(ColorChannel::ColdWhite, cold);
            return Ok(Some((point, payload)));
        }
    }

    if binary && let Some(brightness) = intent.brightness() {
        payload = payload.scaled_to(brightness.value());
    }
    Ok(Some((point, payload)))
}

fn set_rgb(payload: &mut ColorPayload, rgb: RgbColor) {
    for (channel, value) in RGB.into_iter().zip([rgb.red(), rgb.green(), rgb.blue()]) {
        payload.set(channel, value);
    }
}

/// Brightest known non-zero channel of the color point.
pub(super) fn lit_brightness(point: &ColorPoint, cache: &ChannelCache) -> Option<u8> {
    point
        .channels
        .iter()
        .filter_map(|c| cache.channel(*c))
        .max()
        .filter(|v| *v > 0)
}

/// Re-renders the cached color at a new brightness, or full white when no
/// color is cached.
fn rescale_cached(
    capabilities: &LightCapabilities,
    point: &ColorPoint,
    cache: &ChannelCache,
    brightness: u8,
) -> ColorPayload {
    let cached: ColorPayload = point
        .channels
        .iter()
        .map(|c| (*c, cache.channel(*c).unwrap_or(0)))
        .collect();
    if cached.max_value() > 0 {
        return cached.scaled_to(brightness);
    }

    let lit: &[ColorChannel] = if capabilities.supports_rgb() {
        &RGB
    } else {
        &WHITES
    };
    point
        .channels
        .iter()
        .map(|c| (*c, if lit.contains(c) { brightness } else { 0 }))
        .collect()
}
