// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `zwave_light` - Translate light intents into Z-Wave set-value commands.
//!
//! A Z-Wave light is not one device value but a handful of them: a
//! Multilevel Switch level (or a Binary Switch), and optionally a Color
//! Switch with per-channel values. This library turns "make it 50% warm
//! white over 10 seconds" into the ordered set-value commands those points
//! need, and turns the value events the controller reports back into one
//! coherent light state with a single active color mode.
//!
//! # Supported Features
//!
//! - **Capability detection**: dimmer, switch, RGB, RGBW and tunable white
//!   endpoints, from the value ids a Z-Wave JS server reports
//! - **Command translation**: brightness scaling to the native level range,
//!   RGB/HS/RGBW color payloads, white mixing for color temperature,
//!   transition durations where the device accepts them
//! - **State derivation**: on/off, brightness, color mode, color values
//! - **Transports**: in-memory, and the Z-Wave JS UI MQTT gateway
//!   (feature `mqtt`)
//!
//! # Quick Start
//!
//! ## Pure translation
//!
//! ```
//! use zwave_light::{CapabilitiesBuilder, LightIntent, build_turn_on_commands};
//! use zwave_light::state::ChannelCache;
//! use zwave_light::types::{LevelRange, RgbColor};
//!
//! let caps = CapabilitiesBuilder::new(39, 0)
//!     .with_level_range(LevelRange::MULTILEVEL)
//!     .with_rgb()
//!     .with_white_pair()
//!     .build()?;
//!
//! let intent = LightIntent::new().with_rgb(RgbColor::new(255, 76, 255));
//! let commands = build_turn_on_commands(&intent, &caps, &ChannelCache::new())?;
//!
//! // Color first, then the level
//! assert_eq!(commands.len(), 2);
//! # Ok::<(), zwave_light::Error>(())
//! ```
//!
//! ## A light over MQTT
//!
//! ```no_run
//! use zwave_light::{Light, LightIntent, TranslatorConfig};
//! use zwave_light::event::ValueUpdatedEvent;
//! use zwave_light::protocol::MqttTransportBuilder;
//! use zwave_light::types::Brightness;
//!
//! # use zwave_light::value::ValueId;
//! # async fn example(values: Vec<ValueId>, raw_event: &str) -> zwave_light::Result<()> {
//! let transport = MqttTransportBuilder::new()
//!     .broker("mqtt://192.168.1.50:1883")
//!     .build()
//!     .await?;
//!
//! let light = Light::from_values(transport, 39, 0, &values, TranslatorConfig::default())?;
//! let mut events = light.subscribe();
//!
//! light
//!     .turn_on(&LightIntent::new().with_brightness(Brightness::new(128)))
//!     .await?;
//!
//! // Feed value events from the controller
//! light.handle_event(&ValueUpdatedEvent::from_json(raw_event)?);
//! let _ = events.recv().await;
//! println!("{:?}", light.state());
//! # Ok(())
//! # }
//! ```

mod capabilities;
pub mod command;
pub mod error;
pub mod event;
mod light;
pub mod protocol;
pub mod state;
pub mod translator;
pub mod types;
pub mod value;

pub use capabilities::{CapabilitiesBuilder, ColorPoint, LightCapabilities, PrimarySwitch};
pub use error::{
    DispatchError, Error, MetadataError, ParseError, Result, TransportError, ValueError,
};
pub use light::Light;
pub use translator::{
    LightIntent, TranslatorConfig, build_turn_off_commands, build_turn_on_commands, derive_state,
};
