// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepview Viewport: a host-agnostic pan/zoom/fit controller for a scalable
//! visual embedded in a fixed-size container.
//!
//! [`ViewportController`] owns a [`TransformState`] for one content element and
//! keeps it valid while the host feeds it input:
//! - Focal-point zoom from the wheel ([`ViewportController::on_wheel`]) or
//!   discrete steps around the container center ([`ViewportController::zoom_in`],
//!   [`ViewportController::zoom_out`]).
//! - Panning from pointer drags over non-interactive parts of the diagram.
//! - Fit-to-content, split around the host's layout pass
//!   ([`ViewportController::fit_to_content`] then
//!   [`ViewportController::after_layout`]).
//! - Persistence of the view to a [`ViewStateStore`] after every change, with a
//!   24 hour validity window.
//!
//! The controller never touches elements directly. Hosts implement
//! [`ViewportHost`] to resolve elements, report geometry, commit transforms,
//! and manage input subscriptions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use stepview_view2d::{ContentMetrics, TransformState};
//! use stepview_viewport::{
//!     ElementId, InputKind, ListenerId, ViewportConfig, ViewportController, ViewportHost,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     live: TransformState,
//! }
//!
//! impl ViewportHost for Host {
//!     fn resolve(&self, selector: &str) -> Option<ElementId> {
//!         match selector {
//!             "#graph-container" => Some(ElementId(1)),
//!             "#graph" => Some(ElementId(2)),
//!             _ => None,
//!         }
//!     }
//!     fn prepare_surface(&mut self, _: ElementId, _: ElementId) {}
//!     fn container_size(&self, _: ElementId) -> Option<Size> {
//!         Some(Size::new(800.0, 600.0))
//!     }
//!     fn content_metrics(&self, _: ElementId) -> ContentMetrics {
//!         ContentMetrics {
//!             bounding_box: Some(Rect::new(0.0, 0.0, 1000.0, 500.0)),
//!             ..ContentMetrics::default()
//!         }
//!     }
//!     fn commit_transform(&mut self, _: ElementId, t: TransformState) {
//!         self.live = t;
//!     }
//!     fn is_interactive(&self, _: ElementId, _: Point) -> bool {
//!         false
//!     }
//!     fn subscribe(&mut self, _: ElementId, _: InputKind) -> ListenerId {
//!         ListenerId(0)
//!     }
//!     fn unsubscribe(&mut self, _: ListenerId) {}
//! }
//!
//! let mut viewport = ViewportController::new(Host::default(), ViewportConfig::default());
//! assert!(viewport.init("#graph-container", "#graph"));
//!
//! viewport.fit_to_content();
//! // ... host layout pass ...
//! viewport.after_layout();
//! assert!((viewport.transform().scale - 0.7).abs() < 1e-9);
//! assert_eq!(viewport.host().live, viewport.transform());
//! ```

mod clock;
mod command;
mod config;
mod controller;
mod error;
mod host;
mod interaction;
mod persisted;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::ViewCommand;
pub use config::ViewportConfig;
pub use controller::{FitOutcome, ViewportController, ViewportPhase};
pub use error::{ConfigError, ElementRole, StoreError, ViewportError};
pub use host::{ElementId, InputKind, ListenerId, PointerButton, ViewportHost};
pub use interaction::InteractionState;
pub use persisted::{PersistedViewState, VIEW_STATE_KEY, VIEW_STATE_MAX_AGE_MS};
pub use store::{FileStore, MemoryStore, ViewStateStore};

pub use stepview_view2d::{ContentMetrics, TransformState};
