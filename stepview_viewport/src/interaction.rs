// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture state.
//!
//! 1) [`InteractionState::begin`] on pointer-down with the pointer position and
//!    the translation at that moment.
//! 2) [`InteractionState::translation_for`] on each pointer-move to get the new
//!    translation: start translation plus total pointer offset.
//! 3) [`InteractionState::end`] on pointer-up.
//!
//! The translation is derived from the drag start, never accumulated per move.

use kurbo::{Point, Vec2};

/// Tracks an in-progress pan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    drag: Option<DragAnchor>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    pointer: Point,
    translate: Vec2,
}

impl InteractionState {
    /// Starts a pan at `pointer` with the current translation `translate`.
    pub fn begin(&mut self, pointer: Point, translate: Vec2) {
        self.drag = Some(DragAnchor { pointer, translate });
    }

    /// Translation for the pointer at `pointer`, or `None` when not dragging.
    #[must_use]
    pub fn translation_for(&self, pointer: Point) -> Option<Vec2> {
        self.drag.map(|anchor| anchor.translate + (pointer - anchor.pointer))
    }

    /// Ends the pan. Safe when not dragging.
    pub fn end(&mut self) {
        self.drag = None;
    }

    /// `true` while a pan is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer position the pan started from.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag.map(|anchor| anchor.pointer)
    }

    /// Translation at the moment the pan started.
    #[must_use]
    pub fn translate_at_drag_start(&self) -> Option<Vec2> {
        self.drag.map(|anchor| anchor.translate)
    }
}
