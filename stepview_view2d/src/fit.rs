// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::metrics::ResolvedContent;
use crate::transform::{ScaleLimits, TransformState};

/// Parameters for [`fit_content`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// Margin kept free on every side of the container, in pixels.
    pub padding: f64,
    /// Upper bound on the fitted scale so a sparse diagram is not blown up.
    pub scale_cap: f64,
    /// Scale range the result is clamped into.
    pub limits: ScaleLimits,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            padding: 50.0,
            scale_cap: 2.0,
            limits: ScaleLimits::default(),
        }
    }
}

/// Computes the transform that fits `content` inside a `container`, centered.
///
/// The scale is `min(available_w / w, available_h / h, scale_cap)`, where the
/// available extent is the container minus `padding` on each side, then
/// clamped into `limits`. Centering accounts for the content's local origin
/// offset, so a bounding box that does not start at `(0, 0)` still lands in
/// the middle.
///
/// Returns `None` when the container or the padded available area is empty,
/// or when the content has no positive size.
#[must_use]
pub fn fit_content(
    container: Size,
    content: &ResolvedContent,
    params: &FitParams,
) -> Option<TransformState> {
    let available_w = container.width - 2.0 * params.padding;
    let available_h = container.height - 2.0 * params.padding;
    if !(available_w > 0.0 && available_h > 0.0) {
        return None;
    }
    if !(content.size.width > 0.0 && content.size.height > 0.0) {
        return None;
    }

    let scale_x = available_w / content.size.width;
    let scale_y = available_h / content.size.height;
    let scale = params.limits.clamp(scale_x.min(scale_y).min(params.scale_cap));

    let translate_x =
        (container.width - content.size.width * scale) / 2.0 - content.origin.x * scale;
    let translate_y =
        (container.height - content.size.height * scale) / 2.0 - content.origin.y * scale;

    Some(TransformState::new(scale, translate_x, translate_y))
}
