// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound value events and outbound light events.
//!
//! [`ValueUpdatedEvent`] is what the Z-Wave JS server pushes when a value
//! point changes. A [`Light`](crate::Light) folds those into its channel
//! cache and publishes [`LightEvent`]s on an [`EventBus`] whenever the
//! derived state changes.

mod event_bus;
mod light_event;
mod value_event;

pub use event_bus::EventBus;
pub use light_event::LightEvent;
pub use value_event::{ValueUpdate, ValueUpdatedEvent};
