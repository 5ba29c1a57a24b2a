// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! Each type keeps its value within the range the protocol can carry, so the
//! translator never has to re-validate what it is handed.
//!
//! # Types
//!
//! - [`Brightness`] - Presentation brightness (0-255)
//! - [`LevelRange`] - Device-native level bounds (commonly 0-99)
//! - [`ColorTemp`] - Color temperature in mireds
//! - [`MiredsRange`] - Temperature span covered by a warm/cold white mix
//! - [`RgbColor`], [`RgbwColor`], [`HsColor`] - Colors
//! - [`TransitionDuration`] - `default` or an explicit number of seconds
//! - [`ColorMode`] - The light's active color representation

mod brightness;
mod color;
mod color_mode;
mod rgb_color;
mod transition;

pub use brightness::{Brightness, LevelRange};
pub use color::{ColorTemp, HsColor, MiredsRange};
pub use color_mode::ColorMode;
pub use rgb_color::{RgbColor, RgbwColor};
pub use transition::TransitionDuration;
