// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A controllable light endpoint.
//!
//! [`Light`] ties the pieces together: it owns an endpoint's capabilities
//! and channel cache, translates intents into commands, hands them to a
//! [`Transport`] and folds value events back into its state.
//!
//! ```no_run
//! use zwave_light::{Light, LightIntent};
//! use zwave_light::protocol::MemoryTransport;
//! use zwave_light::translator::TranslatorConfig;
//! use zwave_light::types::{Brightness, ColorTemp};
//!
//! # async fn example(values: Vec<zwave_light::value::ValueId>) -> zwave_light::Result<()> {
//! let light = Light::from_values(
//!     MemoryTransport::new(),
//!     39,
//!     0,
//!     &values,
//!     TranslatorConfig::default(),
//! )?;
//!
//! light
//!     .turn_on(
//!         &LightIntent::new()
//!             .with_brightness(Brightness::new(200))
//!             .with_color_temp(ColorTemp::new(250)),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::capabilities::LightCapabilities;
use crate::command::SetValueCommand;
use crate::error::{DispatchError, Result};
use crate::event::{EventBus, LightEvent, ValueUpdatedEvent};
use crate::protocol::Transport;
use crate::state::{ChannelCache, LightState};
use crate::translator::{LightIntent, Translator, TranslatorConfig, derive_state};
use crate::value::ValueId;

/// One light endpoint on one node.
///
/// Cloning is cheap; clones share the transport, cache and event bus.
#[derive(Debug)]
pub struct Light<T: Transport> {
    transport: Arc<T>,
    capabilities: LightCapabilities,
    translator: Translator,
    cache: Arc<RwLock<ChannelCache>>,
    events: EventBus,
}

impl<T: Transport> Clone for Light<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            capabilities: self.capabilities.clone(),
            translator: self.translator,
            cache: Arc::clone(&self.cache),
            events: self.events.clone(),
        }
    }
}

impl<T: Transport> Light<T> {
    /// Creates a light with an empty cache.
    #[must_use]
    pub fn new(transport: T, capabilities: LightCapabilities, config: TranslatorConfig) -> Self {
        Self::with_cache(transport, capabilities, config, ChannelCache::new())
    }

    /// Detects a light from a node's discovered values and seeds its cache
    /// from the values they carry.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not a light or its metadata is
    /// unusable, see [`LightCapabilities::from_values`].
    pub fn from_values(
        transport: T,
        node_id: u16,
        endpoint: u8,
        values: &[ValueId],
        config: TranslatorConfig,
    ) -> Result<Self> {
        let capabilities = LightCapabilities::from_values(node_id, endpoint, values)?;
        tracing::debug!(
            node_id,
            endpoint,
            modes = ?capabilities.supported_color_modes(),
            "Detected light"
        );
        Ok(Self::with_cache(
            transport,
            capabilities,
            config,
            ChannelCache::from_values(endpoint, values),
        ))
    }

    fn with_cache(
        transport: T,
        capabilities: LightCapabilities,
        config: TranslatorConfig,
        cache: ChannelCache,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            capabilities: config.apply_to(capabilities),
            translator: Translator::new(config),
            cache: Arc::new(RwLock::new(cache)),
            events: EventBus::new(),
        }
    }

    /// Returns the light's capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &LightCapabilities {
        &self.capabilities
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a snapshot of the derived state.
    #[must_use]
    pub fn state(&self) -> LightState {
        derive_state(&self.cache.read(), &self.capabilities)
    }

    /// Returns a snapshot of the raw channel cache.
    #[must_use]
    pub fn cache(&self) -> ChannelCache {
        self.cache.read().clone()
    }

    /// Subscribes to this light's events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LightEvent> {
        self.events.subscribe()
    }

    // ========== Inbound ==========

    /// Folds a value event into the cache.
    ///
    /// Events for other nodes or endpoints are ignored. Publishes
    /// [`LightEvent::StateChanged`] when the derived state changes.
    /// Returns `true` if the cache changed.
    pub fn handle_event(&self, event: &ValueUpdatedEvent) -> bool {
        let node_id = self.capabilities.node_id();
        let endpoint = self.capabilities.endpoint();
        if event.node_id != node_id || event.args.endpoint != endpoint {
            return false;
        }

        let (before, after) = {
            let mut cache = self.cache.write();
            let before = derive_state(&cache, &self.capabilities);
            if !cache.apply_update(&event.args) {
                return false;
            }
            (before, derive_state(&cache, &self.capabilities))
        };

        tracing::debug!(
            node_id,
            endpoint,
            command_class = %event.args.command_class,
            property = %event.args.property,
            value = ?event.args.new_value,
            "Applied value event"
        );

        if after != before {
            self.events
                .publish(LightEvent::state_changed(node_id, endpoint, after));
        }
        true
    }

    // ========== Outbound ==========

    /// Turns the light on as `intent` describes.
    ///
    /// Returns the number of commands dispatched.
    ///
    /// # Errors
    ///
    /// Returns error if the intent cannot be translated, or
    /// `Error::Dispatch` if any command fails. All commands are attempted
    /// either way.
    pub async fn turn_on(&self, intent: &LightIntent) -> Result<usize> {
        let commands = {
            let cache = self.cache.read();
            self.translator
                .turn_on_commands(intent, &self.capabilities, &cache)?
        };
        self.dispatch(commands).await
    }

    /// Turns the light off.
    ///
    /// Returns the number of commands dispatched.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is out of range, or
    /// `Error::Dispatch` if the command fails.
    pub async fn turn_off(&self, transition: Option<Duration>) -> Result<usize> {
        let commands = self
            .translator
            .turn_off_commands(transition, &self.capabilities)?;
        self.dispatch(commands).await
    }

    /// Sends commands in order, collecting every failure.
    async fn dispatch(&self, commands: Vec<SetValueCommand>) -> Result<usize> {
        let node_id = self.capabilities.node_id();
        let endpoint = self.capabilities.endpoint();
        let total = commands.len();
        if total == 0 {
            return Ok(0);
        }

        let mut failures = Vec::new();
        for (position, command) in commands.iter().enumerate() {
            tracing::debug!(
                node_id,
                value_id = %command.value_id,
                value = ?command.value,
                transition = ?command.transition(),
                "Dispatching set-value"
            );
            if let Err(e) = self.transport.send(command).await {
                tracing::error!(
                    node_id,
                    value_id = %command.value_id,
                    error = %e,
                    "Set-value failed"
                );
                failures.push((position, e));
            }
        }

        self.events.publish(LightEvent::CommandsDispatched {
            node_id,
            endpoint,
            sent: total,
            failed: failures.len(),
        });

        if failures.is_empty() {
            Ok(total)
        } else {
            Err(DispatchError { total, failures }.into())
        }
    }
}
