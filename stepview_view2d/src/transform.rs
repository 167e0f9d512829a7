// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translation mapping content-local pixels into
/// container-local pixels.
///
/// The content's transform origin is pinned at its own top-left corner, so the
/// mapping is the single affine `p' = scale * p + (translate_x, translate_y)`
/// with no hidden origin offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal offset of the content origin, in container pixels.
    pub translate_x: f64,
    /// Vertical offset of the content origin, in container pixels.
    pub translate_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Creates a transform from its three components.
    #[must_use]
    pub const fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns a copy with the translation replaced and the scale untouched.
    #[must_use]
    pub fn with_translation(self, translate: Vec2) -> Self {
        Self {
            translate_x: translate.x,
            translate_y: translate.y,
            ..self
        }
    }

    /// Returns the equivalent Kurbo affine (translate after scale).
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }

    /// Maps a content-space point into container (view) space.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translate_x,
            pt.y * self.scale + self.translate_y,
        )
    }

    /// Maps a container (view) space point back into content space.
    ///
    /// The scale is assumed to be strictly positive.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate_x) / self.scale,
            (pt.y - self.translate_y) / self.scale,
        )
    }

    /// Changes the scale to `new_scale` while keeping the content point under
    /// `anchor` (container coordinates) fixed on screen.
    #[must_use]
    pub fn zoom_about(self, anchor: Point, new_scale: f64) -> Self {
        let content = self.view_to_content(anchor);
        Self {
            scale: new_scale,
            translate_x: anchor.x - content.x * new_scale,
            translate_y: anchor.y - content.y * new_scale,
        }
    }

    /// Returns `true` when every component is within `eps` of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.scale - other.scale).abs() <= eps
            && (self.translate_x - other.translate_x).abs() <= eps
            && (self.translate_y - other.translate_y).abs() <= eps
    }

    /// Returns `true` when all components are finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite()
            && self.scale > 0.0
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
    }
}

/// Inclusive `[min, max]` range a [`TransformState::scale`] must stay within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::new(0.1, 5.0)
    }
}

impl ScaleLimits {
    /// Creates limits, swapping the bounds if they are given out of order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` when `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}
