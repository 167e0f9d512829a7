// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Which of the two elements a [`ViewportError::MissingElement`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    /// The fixed-size clipping container.
    Container,
    /// The transformed content element inside the container.
    Content,
}

impl core::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Container => f.write_str("container"),
            Self::Content => f.write_str("content"),
        }
    }
}

/// Controller lifecycle errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewportError {
    /// A required element could not be resolved by the host.
    #[error("{role} element `{selector}` could not be resolved")]
    MissingElement {
        /// Which element was missing.
        role: ElementRole,
        /// Selector the host was asked to resolve.
        selector: String,
    },
}

/// Durable storage errors. Always absorbed by the controller.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused the operation (quota, disabled storage, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration was not valid TOML for the expected shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
