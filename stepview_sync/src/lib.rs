// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepview Sync: keeps a [`ViewportController`](stepview_viewport::ViewportController)
//! consistent with a workflow diagram that is re-rendered as execution
//! progresses.
//!
//! - [`WorkflowSnapshot`] decodes the status-poll response and derives
//!   [`Statistics`], resolved [`Connection`]s and a plain-text listing.
//! - [`ContentSyncCoordinator::present`] draws a snapshot through a
//!   [`DiagramRenderer`], stepping down from [`RenderDetail::Full`] to
//!   [`RenderDetail::Simplified`] and finally to the text listing.
//! - Each diagram replacement schedules a sync after a settle delay. The sync
//!   reapplies a fresh saved view verbatim or fits the new content.
//!
//! ```rust
//! use stepview_sync::{NodeState, WorkflowSnapshot};
//!
//! let snapshot = WorkflowSnapshot::from_status_json(
//!     r#"{"success": true, "node_status": [{"node": "start", "status": "finished"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(snapshot.node_status[0].status, NodeState::Finished);
//! assert_eq!(snapshot.statistics().finished, 1);
//! ```

mod config;
mod coordinator;
mod error;
mod render;
mod status;

pub use config::SyncConfig;
pub use coordinator::{ContentSyncCoordinator, PresentOutcome, SyncDecision};
pub use error::{RenderError, StatusError};
pub use render::{DiagramRenderer, RenderDetail};
pub use status::{
    Connection, EdgeRef, EdgeState, EdgeStatus, NodeState, NodeStatus, Statistics,
    WorkflowSnapshot,
};
