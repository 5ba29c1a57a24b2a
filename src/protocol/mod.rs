// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports that deliver set-value commands to a Z-Wave controller.
//!
//! # Transports
//!
//! - [`MemoryTransport`]: records commands in memory, for tests and hosts
//!   that forward commands themselves
//! - [`MqttTransport`]: publishes to the Z-Wave JS UI MQTT gateway API
//!   (feature `mqtt`)

mod memory;
#[cfg(feature = "mqtt")]
mod mqtt;

pub use memory::MemoryTransport;
#[cfg(feature = "mqtt")]
pub use mqtt::{MqttTransport, MqttTransportBuilder, write_value_payload};

use crate::command::SetValueCommand;
use crate::error::TransportError;

/// Delivers set-value commands to a controller.
///
/// Delivery is fire-and-forget: `Ok` means the command was handed over,
/// not that the device reached the value. Device state changes come back
/// as value events.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one command.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the command could not be handed over.
    async fn send(&self, command: &SetValueCommand) -> Result<(), TransportError>;
}
