// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Which measurement produced a [`ResolvedContent`] size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSource {
    /// Size metadata declared by the visual itself (for example SVG
    /// `width`/`height` or a `viewBox`).
    Declared,
    /// Geometric bounding box of the drawn primitives, in the visual's own
    /// coordinate space.
    BoundingBox,
    /// Box the host laid the visual out into. Last resort.
    Rendered,
}

/// Raw measurements a host reports for the content element.
///
/// Any of the three may be missing or degenerate; [`ContentMetrics::resolve`]
/// picks the first usable one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentMetrics {
    /// Intrinsic size declared by the visual.
    pub declared_size: Option<Size>,
    /// Geometric bounding box in the visual's local coordinates.
    pub bounding_box: Option<Rect>,
    /// Rendered box in host coordinates.
    pub rendered_box: Option<Rect>,
}

/// Content size chosen for fitting, plus the local origin offset to compensate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedContent {
    /// Width and height of the content, unscaled.
    pub size: Size,
    /// Position of the content's visual top-left in its own coordinate space.
    pub origin: Point,
    /// Measurement the size came from.
    pub source: MeasureSource,
}

impl ContentMetrics {
    /// Resolves a usable content size: declared size first, then bounding
    /// box, then rendered box.
    ///
    /// The origin offset always comes from the bounding box when one is
    /// available, since it is the only measurement expressed in the content's
    /// local coordinate space. Returns `None` when no dimension is usable.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedContent> {
        let origin = self
            .bounding_box
            .filter(|b| b.x0.is_finite() && b.y0.is_finite())
            .map_or(Point::ZERO, |b| b.origin());

        if let Some(size) = self.declared_size.filter(|s| usable(*s)) {
            return Some(ResolvedContent {
                size,
                origin,
                source: MeasureSource::Declared,
            });
        }
        if let Some(bbox) = self.bounding_box.filter(|b| usable(b.size())) {
            return Some(ResolvedContent {
                size: bbox.size(),
                origin,
                source: MeasureSource::BoundingBox,
            });
        }
        self.rendered_box
            .filter(|b| usable(b.size()))
            .map(|b| ResolvedContent {
                size: b.size(),
                origin,
                source: MeasureSource::Rendered,
            })
    }
}

fn usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{ContentMetrics, MeasureSource};

    #[test]
    fn declared_size_wins() {
        let metrics = ContentMetrics {
            declared_size: Some(Size::new(640.0, 480.0)),
            bounding_box: Some(Rect::new(8.0, 8.0, 600.0, 400.0)),
            rendered_box: Some(Rect::new(0.0, 0.0, 300.0, 200.0)),
        };
        let resolved = metrics.resolve().unwrap();
        assert_eq!(resolved.source, MeasureSource::Declared);
        assert_eq!(resolved.size, Size::new(640.0, 480.0));
        assert_eq!(resolved.origin, Point::new(8.0, 8.0));
    }

    #[test]
    fn zero_declared_size_falls_back_to_bbox() {
        let metrics = ContentMetrics {
            declared_size: Some(Size::new(0.0, 480.0)),
            bounding_box: Some(Rect::new(-20.0, 4.0, 180.0, 104.0)),
            rendered_box: None,
        };
        let resolved = metrics.resolve().unwrap();
        assert_eq!(resolved.source, MeasureSource::BoundingBox);
        assert_eq!(resolved.size, Size::new(200.0, 100.0));
        assert_eq!(resolved.origin, Point::new(-20.0, 4.0));
    }

    #[test]
    fn rendered_box_is_last_resort_without_origin() {
        let metrics = ContentMetrics {
            declared_size: None,
            bounding_box: None,
            rendered_box: Some(Rect::new(100.0, 50.0, 400.0, 250.0)),
        };
        let resolved = metrics.resolve().unwrap();
        assert_eq!(resolved.source, MeasureSource::Rendered);
        assert_eq!(resolved.size, Size::new(300.0, 200.0));
        assert_eq!(resolved.origin, Point::ZERO);
    }

    #[test]
    fn nothing_usable() {
        assert!(ContentMetrics::default().resolve().is_none());
        let metrics = ContentMetrics {
            declared_size: Some(Size::ZERO),
            bounding_box: Some(Rect::new(5.0, 5.0, 5.0, 5.0)),
            rendered_box: Some(Rect::new(0.0, 0.0, f64::NAN, 10.0)),
        };
        assert!(metrics.resolve().is_none());
    }
}
