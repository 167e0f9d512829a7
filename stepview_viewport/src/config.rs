// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use serde::{Deserialize, Serialize};
use stepview_view2d::{FitParams, ScaleLimits};

use crate::error::ConfigError;

/// Options recognized by [`ViewportController`](crate::ViewportController).
///
/// Keys may be written in snake_case or with the camelCase names used by the
/// web front end (`minScale`, `zoomStepSize`, ...). Missing keys take their
/// default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Smallest allowed scale.
    #[serde(alias = "minScale")]
    pub min_scale: f64,
    /// Largest allowed scale.
    #[serde(alias = "maxScale")]
    pub max_scale: f64,
    /// Additive scale step for discrete zoom in/out.
    #[serde(alias = "zoomStepSize", alias = "zoom_step_size")]
    pub zoom_step: f64,
    /// Scale change per unit of wheel delta.
    #[serde(alias = "wheelSensitivity")]
    pub wheel_sensitivity: f64,
    /// Margin kept free on each side when fitting, in pixels.
    #[serde(alias = "fitPadding")]
    pub fit_padding: f64,
    /// Whether transform changes are written to durable storage.
    #[serde(alias = "enablePersistence")]
    pub enable_persistence: bool,
    /// Upper bound for the scale chosen by fit-to-content.
    #[serde(alias = "scaleCap")]
    pub scale_cap: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 5.0,
            zoom_step: 0.1,
            wheel_sensitivity: 0.001,
            fit_padding: 50.0,
            enable_persistence: true,
            scale_cap: 2.0,
        }
    }
}

impl ViewportConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Self>(s)?.normalized())
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Returns a copy with `min_scale <= 1.0 <= max_scale`.
    ///
    /// Inverted bounds are swapped, then the range is widened to include
    /// scale 1 so a reset always lands on the identity transform.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        self.min_scale = self.min_scale.min(1.0);
        self.max_scale = self.max_scale.max(1.0);
        self
    }

    /// The configured scale range.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min_scale, self.max_scale)
    }

    /// Fit parameters derived from this configuration.
    #[must_use]
    pub fn fit_params(&self) -> FitParams {
        FitParams {
            padding: self.fit_padding,
            scale_cap: self.scale_cap,
            limits: self.limits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportConfig;

    #[test]
    fn empty_document_is_default() {
        let config = ViewportConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewportConfig::default());
    }

    #[test]
    fn accepts_camel_case_option_names() {
        let config = ViewportConfig::from_toml_str(
            r#"
            minScale = 0.25
            maxScale = 3.0
            zoomStepSize = 0.2
            wheelSensitivity = 0.002
            fitPadding = 20
            enablePersistence = false
            scaleCap = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.min_scale, 0.25);
        assert_eq!(config.max_scale, 3.0);
        assert_eq!(config.zoom_step, 0.2);
        assert_eq!(config.wheel_sensitivity, 0.002);
        assert_eq!(config.fit_padding, 20.0);
        assert!(!config.enable_persistence);
        assert_eq!(config.scale_cap, 1.5);
    }

    #[test]
    fn inverted_limits_are_swapped() {
        let config = ViewportConfig::from_toml_str("min_scale = 4.0\nmax_scale = 0.5").unwrap();
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 4.0);
    }

    #[test]
    fn scale_range_always_contains_one() {
        let config = ViewportConfig::from_toml_str("min_scale = 1.5\nmax_scale = 3.0").unwrap();
        assert_eq!(config.min_scale, 1.0);
        assert_eq!(config.max_scale, 3.0);

        let config = ViewportConfig::from_toml_str("min_scale = 0.2\nmax_scale = 0.5").unwrap();
        assert_eq!(config.min_scale, 0.2);
        assert_eq!(config.max_scale, 1.0);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ViewportConfig::from_toml_str("min_scale = \"small\"").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewport.toml");
        std::fs::write(&path, "fit_padding = 10.0\n").unwrap();
        let config = ViewportConfig::load(&path).unwrap();
        assert_eq!(config.fit_padding, 10.0);
    }
}
