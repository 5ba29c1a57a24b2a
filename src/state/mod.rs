// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking.
//!
//! A [`ChannelCache`] holds the raw values a light endpoint last reported,
//! one slot per value point. Value events become [`ChannelChange`]s that
//! update single slots. The [`LightState`] a host displays is recomputed
//! from the whole cache by
//! [`derive_state`](crate::translator::derive_state), never patched
//! incrementally.
//!
//! # Examples
//!
//! ```
//! use zwave_light::event::ValueUpdate;
//! use zwave_light::state::ChannelCache;
//! use zwave_light::value::CommandClass;
//!
//! let mut cache = ChannelCache::new();
//! let update = ValueUpdate::new(
//!     CommandClass::SWITCH_MULTILEVEL, 0, "currentValue", serde_json::json!(99),
//! );
//!
//! assert!(cache.apply_update(&update));
//! assert_eq!(cache.level(), Some(99));
//! ```

mod channel_cache;
mod channel_change;
mod light_state;

pub use channel_cache::ChannelCache;
pub use channel_change::ChannelChange;
pub use light_state::LightState;
