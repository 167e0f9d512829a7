// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stepview_viewport::{ViewportController, ViewportHost, ViewportPhase};
use tracing::{debug, info, trace, warn};

use crate::config::SyncConfig;
use crate::render::{DiagramRenderer, RenderDetail};
use crate::status::WorkflowSnapshot;

/// Result of [`ContentSyncCoordinator::present`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentOutcome {
    /// A diagram was drawn at the given detail and a sync was scheduled.
    Rendered(RenderDetail),
    /// Every diagram attempt failed; the text listing is shown instead.
    TextFallback,
    /// The snapshot matched the one already on screen.
    Unchanged,
}

/// What a re-sync did to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncDecision {
    /// A saved view exists and the retained transform was re-committed.
    Reapplied,
    /// A fit was requested (or joined one already pending).
    Fitted,
    /// Nothing was done: the controller is not initialized or refused the fit.
    Skipped,
}

/// Keeps the viewport consistent with content that is replaced underneath it.
///
/// Each content replacement schedules one sync `settle_delay_ms` later. When a
/// sync runs, a fresh saved view is honored verbatim; otherwise the new
/// content is fitted. Time comes from the controller's clock, and the host
/// drives [`poll`](Self::poll) from its timer.
#[derive(Debug)]
pub struct ContentSyncCoordinator<R> {
    renderer: R,
    config: SyncConfig,
    last_presented: Option<WorkflowSnapshot>,
    /// Sync deadlines in epoch milliseconds, ascending.
    pending: Vec<u64>,
}

impl<R: DiagramRenderer> ContentSyncCoordinator<R> {
    /// Creates a coordinator drawing through `renderer`.
    pub fn new(renderer: R, config: SyncConfig) -> Self {
        Self {
            renderer,
            config,
            last_presented: None,
            pending: Vec::new(),
        }
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The active configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// The snapshot currently drawn as a diagram, if any.
    pub fn last_presented(&self) -> Option<&WorkflowSnapshot> {
        self.last_presented.as_ref()
    }

    /// Number of scheduled syncs that have not run yet.
    pub fn pending_syncs(&self) -> usize {
        self.pending.len()
    }

    /// Earliest scheduled sync deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().copied()
    }

    /// Draws `snapshot`, falling back from the full diagram to a simplified
    /// one and finally to a text listing.
    ///
    /// A diagram render counts as a content replacement and schedules a sync.
    /// The text listing does not, and leaves the snapshot eligible for another
    /// diagram attempt on the next call.
    pub fn present<H: ViewportHost>(
        &mut self,
        snapshot: &WorkflowSnapshot,
        viewport: &ViewportController<H>,
    ) -> PresentOutcome {
        if self.last_presented.as_ref() == Some(snapshot) {
            trace!("snapshot unchanged");
            return PresentOutcome::Unchanged;
        }
        for detail in [RenderDetail::Full, RenderDetail::Simplified] {
            match self.renderer.render(snapshot, detail) {
                Ok(()) => {
                    debug!(?detail, nodes = snapshot.node_status.len(), "diagram rendered");
                    self.last_presented = Some(snapshot.clone());
                    self.content_replaced(viewport);
                    return PresentOutcome::Rendered(detail);
                }
                Err(err) => warn!(%err, ?detail, "diagram render failed"),
            }
        }
        self.last_presented = None;
        self.renderer.show_text(&snapshot.status_listing());
        info!(nodes = snapshot.node_status.len(), "showing status listing");
        PresentOutcome::TextFallback
    }

    /// Schedules a sync for content the host replaced on its own.
    pub fn content_replaced<H: ViewportHost>(&mut self, viewport: &ViewportController<H>) {
        let due = viewport.now_ms().saturating_add(self.config.settle_delay_ms);
        let at = self.pending.partition_point(|&d| d <= due);
        self.pending.insert(at, due);
        trace!(due, pending = self.pending.len(), "sync scheduled");
    }

    /// Runs every scheduled sync whose deadline has passed, oldest first.
    pub fn poll<H: ViewportHost>(
        &mut self,
        viewport: &mut ViewportController<H>,
    ) -> Vec<SyncDecision> {
        let now = viewport.now_ms();
        let due = self.pending.partition_point(|&d| d <= now);
        if due == 0 {
            return Vec::new();
        }
        self.pending.drain(..due);
        (0..due).map(|_| self.sync_now(viewport)).collect()
    }

    /// Re-syncs the view with the current content immediately.
    pub fn sync_now<H: ViewportHost>(
        &mut self,
        viewport: &mut ViewportController<H>,
    ) -> SyncDecision {
        let decision = if !viewport.is_initialized() {
            SyncDecision::Skipped
        } else if viewport.phase() == ViewportPhase::Rendering {
            viewport.fit_to_content();
            SyncDecision::Fitted
        } else if viewport.has_saved_state() {
            viewport.reapply_transform();
            SyncDecision::Reapplied
        } else if viewport.fit_to_content() {
            SyncDecision::Fitted
        } else {
            SyncDecision::Skipped
        };
        debug!(?decision, "view synced");
        decision
    }

    /// Drops scheduled syncs and forgets the presented snapshot.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
        self.last_presented = None;
    }
}

#[cfg(test)]
mod tests {
    use super::ContentSyncCoordinator;
    use crate::config::SyncConfig;
    use crate::error::RenderError;
    use crate::render::{DiagramRenderer, RenderDetail};
    use crate::status::WorkflowSnapshot;

    #[derive(Default)]
    struct NullRenderer;

    impl DiagramRenderer for NullRenderer {
        fn render(&mut self, _: &WorkflowSnapshot, _: RenderDetail) -> Result<(), RenderError> {
            Ok(())
        }

        fn show_text(&mut self, _: &str) {}
    }

    #[test]
    fn starts_idle() {
        let sync = ContentSyncCoordinator::new(NullRenderer, SyncConfig::default());
        assert_eq!(sync.pending_syncs(), 0);
        assert_eq!(sync.next_deadline(), None);
        assert!(sync.last_presented().is_none());
        assert_eq!(sync.config().settle_delay_ms, 100);
    }

    #[test]
    fn cancel_pending_forgets_everything() {
        let mut sync = ContentSyncCoordinator::new(NullRenderer, SyncConfig::default());
        sync.pending = vec![5, 10];
        sync.last_presented = Some(WorkflowSnapshot::default());
        sync.cancel_pending();
        assert_eq!(sync.pending_syncs(), 0);
        assert!(sync.last_presented().is_none());
    }
}
