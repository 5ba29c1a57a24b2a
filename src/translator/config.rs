// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translator configuration.

use serde::Deserialize;

use crate::capabilities::LightCapabilities;
use crate::types::MiredsRange;

/// Settings that shape how intents become commands and how state is
/// reported.
///
/// Deserializes from a host's configuration with every field optional.
///
/// # Examples
///
/// ```
/// use zwave_light::translator::TranslatorConfig;
///
/// let config: TranslatorConfig = serde_json::from_str(r#"{
///     "skip_redundant": true,
///     "mireds_range": {"min": 153, "max": 500}
/// }"#).unwrap();
///
/// assert!(config.skip_redundant);
/// assert!(!config.report_rgb);
/// assert_eq!(config.mireds_range.unwrap().max().value(), 500);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Emit no command when a turn-on request matches the cached state and
    /// carries no transition.
    pub skip_redundant: bool,
    /// Temperature span of the warm/cold white mix. `None` keeps the range
    /// carried by the light's capabilities.
    pub mireds_range: Option<MiredsRange>,
    /// Report RGB color as `rgb` instead of `hs`. Only state reporting
    /// changes; the commands sent are the same.
    pub report_rgb: bool,
}

impl TranslatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips commands that would not change the light.
    #[must_use]
    pub fn with_skip_redundant(mut self) -> Self {
        self.skip_redundant = true;
        self
    }

    /// Sets the mireds range.
    #[must_use]
    pub fn with_mireds_range(mut self, range: MiredsRange) -> Self {
        self.mireds_range = Some(range);
        self
    }

    /// Reports RGB color as `rgb`.
    #[must_use]
    pub fn with_report_rgb(mut self) -> Self {
        self.report_rgb = true;
        self
    }

    /// Returns the mireds range to mix whites over for `capabilities`.
    #[must_use]
    pub fn mireds_range_for(&self, capabilities: &LightCapabilities) -> MiredsRange {
        self.mireds_range.unwrap_or(capabilities.mireds_range())
    }

    /// Applies the settings this config overrides to detected capabilities.
    ///
    /// Settings the config leaves unset keep the capabilities' values.
    #[must_use]
    pub fn apply_to(&self, capabilities: LightCapabilities) -> LightCapabilities {
        let capabilities = match self.mireds_range {
            Some(range) => capabilities.with_mireds_range(range),
            None => capabilities,
        };
        if self.report_rgb {
            capabilities.with_rgb_mode()
        } else {
            capabilities
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::CapabilitiesBuilder;
    use crate::types::{ColorMode, LevelRange};

    #[test]
    fn empty_config_uses_defaults() {
        let config: TranslatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TranslatorConfig::default());
        assert!(!config.skip_redundant);
        assert_eq!(config.mireds_range, None);
    }

    #[test]
    fn invalid_mireds_range_is_rejected() {
        let result: Result<TranslatorConfig, _> =
            serde_json::from_str(r#"{"mireds_range": {"min": 400, "max": 200}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn apply_to_sets_reporting() {
        let caps = CapabilitiesBuilder::new(1, 0)
            .with_level_range(LevelRange::MULTILEVEL)
            .with_rgb()
            .build()
            .unwrap();
        let range = MiredsRange::new(150, 500).unwrap();
        let caps = TranslatorConfig::new()
            .with_report_rgb()
            .with_mireds_range(range)
            .apply_to(caps);

        assert_eq!(caps.supported_color_modes(), vec![ColorMode::Rgb]);
        assert_eq!(caps.mireds_range(), range);
    }

    #[test]
    fn unset_range_keeps_capabilities_range() {
        let range = MiredsRange::new(153, 500).unwrap();
        let caps = CapabilitiesBuilder::new(1, 0)
            .with_white_pair()
            .with_mireds_range(range)
            .build()
            .unwrap();

        let config = TranslatorConfig::default();
        assert_eq!(config.mireds_range_for(&caps), range);
        assert_eq!(config.apply_to(caps).mireds_range(), range);
    }
}
