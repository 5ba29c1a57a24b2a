// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light event types.

use crate::state::LightState;

/// Events emitted by a [`Light`](crate::Light).
///
/// # Examples
///
/// ```
/// use zwave_light::event::LightEvent;
/// use zwave_light::state::LightState;
///
/// let event = LightEvent::state_changed(39, 0, LightState::default());
/// assert!(event.is_state_change());
/// assert_eq!(event.node_id(), 39);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LightEvent {
    /// The derived light state changed after a value event.
    StateChanged {
        /// Node of the light.
        node_id: u16,
        /// Endpoint of the light.
        endpoint: u8,
        /// The complete new state.
        state: LightState,
    },

    /// A batch of set-value commands was handed to the transport.
    CommandsDispatched {
        /// Node of the light.
        node_id: u16,
        /// Endpoint of the light.
        endpoint: u8,
        /// Number of commands in the batch.
        sent: usize,
        /// Number of commands the transport rejected.
        failed: usize,
    },
}

impl LightEvent {
    /// Returns the node this event concerns.
    #[must_use]
    pub const fn node_id(&self) -> u16 {
        match self {
            Self::StateChanged { node_id, .. } | Self::CommandsDispatched { node_id, .. } => {
                *node_id
            }
        }
    }

    /// Returns the endpoint this event concerns.
    #[must_use]
    pub const fn endpoint(&self) -> u8 {
        match self {
            Self::StateChanged { endpoint, .. } | Self::CommandsDispatched { endpoint, .. } => {
                *endpoint
            }
        }
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub const fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Creates a state changed event.
    #[must_use]
    pub const fn state_changed(node_id: u16, endpoint: u8, state: LightState) -> Self {
        Self::StateChanged {
            node_id,
            endpoint,
            state,
        }
    }
}
