// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepview View 2D: headless transform math for a scalable visual inside a
//! fixed-size container.
//!
//! This crate provides the pure geometry behind the Stepview viewport:
//! - [`TransformState`]: a uniform scale + translation with the content's
//!   transform origin pinned to its top-left corner.
//! - Focal-point zoom via [`TransformState::zoom_about`]: the content point
//!   under a chosen container pixel stays under that pixel.
//! - Content fitting via [`fit_content`]: the largest (capped) scale that fits
//!   the content in a padded container, centered.
//! - Content measurement via [`ContentMetrics::resolve`]: declared size, then
//!   geometric bounding box, then rendered box.
//!
//! It does **not** own any element, event loop, or persistence. Those live
//! in `stepview_viewport`, which drives this crate from host input.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use stepview_view2d::{ContentMetrics, FitParams, fit_content};
//!
//! let metrics = ContentMetrics {
//!     bounding_box: Some(Rect::new(0.0, 0.0, 1000.0, 500.0)),
//!     ..ContentMetrics::default()
//! };
//! let content = metrics.resolve().unwrap();
//! let fitted = fit_content(Size::new(800.0, 600.0), &content, &FitParams::default()).unwrap();
//! assert!((fitted.scale - 0.7).abs() < 1e-9);
//!
//! // Zooming about the container center keeps that pixel's content point fixed.
//! let center = Point::new(400.0, 300.0);
//! let before = fitted.view_to_content(center);
//! let zoomed = fitted.zoom_about(center, 1.4);
//! let after = zoomed.view_to_content(center);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod metrics;
mod transform;

pub use fit::{FitParams, fit_content};
pub use metrics::{ContentMetrics, MeasureSource, ResolvedContent};
pub use transform::{ScaleLimits, TransformState};
