// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use serde::{Deserialize, Serialize};
use stepview_viewport::ConfigError;

/// Options recognized by [`ContentSyncCoordinator`](crate::ContentSyncCoordinator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Delay between a content replacement and the view re-sync, in
    /// milliseconds. Gives the host time to lay out the new content.
    #[serde(alias = "settleDelayMs")]
    pub settle_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
        }
    }
}

impl SyncConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
