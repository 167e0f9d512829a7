// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::RenderError;
use crate::status::WorkflowSnapshot;

/// How much of the diagram a render attempt should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderDetail {
    /// Nodes with descriptions, edge labels and status styling.
    Full,
    /// Node names and plain edges only.
    Simplified,
}

/// Draws workflow snapshots into the content element.
///
/// Implementations replace the content element's children on success. On
/// failure they may leave partial output behind; the caller follows up with
/// another attempt or [`show_text`](Self::show_text).
pub trait DiagramRenderer {
    /// Renders `snapshot` at the requested detail.
    fn render(
        &mut self,
        snapshot: &WorkflowSnapshot,
        detail: RenderDetail,
    ) -> Result<(), RenderError>;

    /// Replaces the content with a plain-text status listing.
    fn show_text(&mut self, text: &str);
}

impl<R: DiagramRenderer + ?Sized> DiagramRenderer for Box<R> {
    fn render(
        &mut self,
        snapshot: &WorkflowSnapshot,
        detail: RenderDetail,
    ) -> Result<(), RenderError> {
        (**self).render(snapshot, detail)
    }

    fn show_text(&mut self, text: &str) {
        (**self).show_text(text);
    }
}
