// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use stepview_view2d::TransformState;

/// Fixed storage key of the persisted view record.
pub const VIEW_STATE_KEY: &str = "stepview.viewport.v1";

/// How long a persisted record stays restorable.
pub const VIEW_STATE_MAX_AGE_MS: u64 = 24 * 60 * 60 * 1000;

/// The durable view record.
///
/// Serialized as `{"scale", "translateX", "translateY", "timestamp"}` with the
/// timestamp in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedViewState {
    /// Saved scale.
    pub scale: f64,
    /// Saved horizontal translation.
    pub translate_x: f64,
    /// Saved vertical translation.
    pub translate_y: f64,
    /// When the record was written.
    pub timestamp: u64,
}

impl PersistedViewState {
    /// Captures `transform` at time `now_ms`.
    #[must_use]
    pub fn capture(transform: &TransformState, now_ms: u64) -> Self {
        Self {
            scale: transform.scale,
            translate_x: transform.translate_x,
            translate_y: transform.translate_y,
            timestamp: now_ms,
        }
    }

    /// The saved transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        TransformState::new(self.scale, self.translate_x, self.translate_y)
    }

    /// `true` while `now - timestamp` is under [`VIEW_STATE_MAX_AGE_MS`].
    ///
    /// A timestamp in the future counts as fresh.
    #[must_use]
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < VIEW_STATE_MAX_AGE_MS
    }

    /// Decodes a stored record. Anything unparseable or with a non-usable
    /// transform yields `None`.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .filter(|record| record.transform().is_valid())
    }
}
