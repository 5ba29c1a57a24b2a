// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light command/state translation.
//!
//! Two directions, both pure:
//!
//! - [`Translator::turn_on_commands`] / [`Translator::turn_off_commands`]
//!   turn a [`LightIntent`] into the ordered [`SetValueCommand`]s an
//!   endpoint needs
//! - [`derive_state`] turns a [`ChannelCache`] into the [`LightState`] a
//!   host displays
//!
//! # Command shapes
//!
//! | Intent | Dimmer + color | Dimmer | Switch + color |
//! |---|---|---|---|
//! | on | level 255 | level 255 | switch on |
//! | brightness | level | level | rescaled color, switch on |
//! | color | color, level | unsupported | color, switch on |
//! | off | level min | level min | switch off |
//!
//! [`SetValueCommand`]: crate::command::SetValueCommand
//! [`ChannelCache`]: crate::state::ChannelCache
//! [`LightState`]: crate::state::LightState

mod commands;
mod config;
mod derive;
mod intent;

pub use commands::{Translator, build_turn_off_commands, build_turn_on_commands};
pub use config::TranslatorConfig;
pub use derive::derive_state;
pub use intent::{ColorRequest, LightIntent};
