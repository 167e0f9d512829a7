// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Status response decoding errors.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The body was not a valid status response.
    #[error("invalid status response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with `success: false`.
    #[error("status request rejected: {0}")]
    Rejected(String),
}

/// Diagram rendering errors reported by a [`DiagramRenderer`](crate::DiagramRenderer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The renderer failed outright.
    #[error("render failed: {0}")]
    Failed(String),

    /// The renderer finished but produced nothing visible.
    #[error("render produced no output")]
    EmptyOutput,
}
