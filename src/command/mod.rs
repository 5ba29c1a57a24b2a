// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound set-value commands.
//!
//! Everything the translator asks a device to do is a [`SetValueCommand`]:
//! a node, a target value point, a [`CommandValue`] and optional
//! [`SetValueOptions`]. A light command is an ordered list of these.
//!
//! | Target point | Value |
//! |---|---|
//! | Multilevel Switch `targetValue` | [`CommandValue::Level`] (255 restores the previous level) |
//! | Binary Switch `targetValue` | [`CommandValue::Switch`] |
//! | Color Switch `targetColor` | [`CommandValue::Color`] |

mod set_value;

pub use set_value::{
    ColorPayload, CommandValue, RESTORE_PREVIOUS_LEVEL, SET_VALUE, SetValueCommand,
    SetValueOptions, ValueIdArgs,
};
