// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between [`ViewportController`](crate::ViewportController) and the
//! UI toolkit that owns the actual elements.

use kurbo::{Point, Size};
use stepview_view2d::{ContentMetrics, TransformState};

/// Opaque handle to a host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Opaque handle to an input subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Input streams the controller subscribes to on the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Pointer button pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer button released (or the pointer left the container).
    PointerUp,
    /// Scroll wheel.
    Wheel,
    /// Container resized.
    Resize,
    /// Keyboard shortcut.
    Key,
}

impl InputKind {
    /// Every kind, in subscription order.
    pub const ALL: [Self; 6] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::Wheel,
        Self::Resize,
        Self::Key,
    ];
}

/// Pointer button of a pointer-down event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Middle,
}

/// Host UI surface the controller drives.
///
/// All points are container-local pixels. Implementations are expected to run
/// on the UI thread; nothing here is called concurrently.
pub trait ViewportHost {
    /// Resolves an element by selector or identifier.
    fn resolve(&self, selector: &str) -> Option<ElementId>;

    /// Applies the baseline styling the transform math depends on: content
    /// transform origin at its top-left, container overflow clipped, content
    /// margin and padding zero.
    fn prepare_surface(&mut self, container: ElementId, content: ElementId);

    /// Post-layout size of the container, if it has been laid out.
    fn container_size(&self, container: ElementId) -> Option<Size>;

    /// Raw measurements of the visual currently inside `content`.
    fn content_metrics(&self, content: ElementId) -> ContentMetrics;

    /// Makes `transform` the live transform of `content`.
    fn commit_transform(&mut self, content: ElementId, transform: TransformState);

    /// `true` if `point` hits a clickable graph node (or one of its shapes).
    fn is_interactive(&self, content: ElementId, point: Point) -> bool;

    /// Starts delivering `kind` input for `container`.
    fn subscribe(&mut self, container: ElementId, kind: InputKind) -> ListenerId;

    /// Stops a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, listener: ListenerId);
}
