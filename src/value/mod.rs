// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value point model.
//!
//! A Z-Wave node exposes its state as value points addressed by command
//! class, endpoint, property and optional property key. Each point carries
//! metadata (type, bounds, writability, accepted set-value options). These
//! types mirror the shape the Z-Wave JS server uses on the wire, so they
//! deserialize straight from discovery dumps and serialize back into
//! commands.
//!
//! # Light-related properties
//!
//! | Command class | Property | Meaning |
//! |---|---|---|
//! | Multilevel Switch (38) | `targetValue` / `currentValue` | Dimmer level |
//! | Binary Switch (37) | `targetValue` / `currentValue` | On/off |
//! | Color Switch (51) | `targetColor` | Combined color to write |
//! | Color Switch (51) | `currentColor` + key | One channel's current value |

mod color_channel;
mod command_class;
mod value_id;

pub use color_channel::ColorChannel;
pub use command_class::CommandClass;
pub use value_id::{Property, TRANSITION_DURATION, ValueId, ValueMetadata, ValueType};

/// Property written to change a switch level or state.
pub const TARGET_VALUE: &str = "targetValue";

/// Property reporting a switch's current level or state.
pub const CURRENT_VALUE: &str = "currentValue";

/// Property written to change a color.
pub const TARGET_COLOR: &str = "targetColor";

/// Property reporting the current color, one channel per property key.
pub const CURRENT_COLOR: &str = "currentColor";
