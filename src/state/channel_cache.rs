// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last-known raw values of a light endpoint.

use crate::event::ValueUpdate;
use crate::value::{ColorChannel, ValueId};

use super::ChannelChange;

/// Last-known native values of one light endpoint.
///
/// Every slot starts unknown. Slots are only written through
/// [`apply`](Self::apply), so an event never touches more than the slots
/// its value point feeds.
///
/// # Examples
///
/// ```
/// use zwave_light::state::{ChannelCache, ChannelChange};
/// use zwave_light::value::ColorChannel;
///
/// let mut cache = ChannelCache::new();
/// assert!(cache.apply(&ChannelChange::Level(Some(99))));
/// assert!(!cache.apply(&ChannelChange::Level(Some(99))));
///
/// assert_eq!(cache.level(), Some(99));
/// assert_eq!(cache.channel(ColorChannel::Red), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelCache {
    level: Option<u8>,
    switch: Option<bool>,
    /// Indexed by Color Switch component id.
    channels: [Option<u8>; 5],
}

impl ChannelCache {
    /// Creates a cache with every slot unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a cache from the values discovered for `endpoint`.
    #[must_use]
    pub fn from_values(endpoint: u8, values: &[ValueId]) -> Self {
        let mut cache = Self::new();
        for value_id in values.iter().filter(|v| v.endpoint == endpoint) {
            for change in ChannelChange::from_value_id(value_id) {
                cache.apply(&change);
            }
        }
        cache
    }

    /// Returns the multilevel switch level.
    #[must_use]
    pub const fn level(&self) -> Option<u8> {
        self.level
    }

    /// Returns the binary switch state.
    #[must_use]
    pub const fn switch(&self) -> Option<bool> {
        self.switch
    }

    /// Returns one color channel's value.
    #[must_use]
    pub const fn channel(&self, channel: ColorChannel) -> Option<u8> {
        self.channels[channel.property_key() as usize]
    }

    /// Applies a change and returns `true` if the slot's value changed.
    pub fn apply(&mut self, change: &ChannelChange) -> bool {
        let changed = match *change {
            ChannelChange::Level(value) => std::mem::replace(&mut self.level, value) != value,
            ChannelChange::Switch(value) => std::mem::replace(&mut self.switch, value) != value,
            ChannelChange::Channel { channel, value } => {
                let slot = &mut self.channels[channel.property_key() as usize];
                std::mem::replace(slot, value) != value
            }
        };
        if changed {
            tracing::trace!(change = ?change, "Channel cache updated");
        }
        changed
    }

    /// Applies every change an update carries.
    ///
    /// Returns `true` if any slot changed.
    pub fn apply_update(&mut self, update: &ValueUpdate) -> bool {
        ChannelChange::from_update(update)
            .iter()
            .fold(false, |changed, change| self.apply(change) | changed)
    }
}
