// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};
use stepview_view2d::{ScaleLimits, TransformState, fit_content};
use tracing::{debug, info, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::command::ViewCommand;
use crate::config::ViewportConfig;
use crate::error::{ElementRole, StoreError, ViewportError};
use crate::host::{ElementId, InputKind, ListenerId, PointerButton, ViewportHost};
use crate::interaction::InteractionState;
use crate::persisted::{PersistedViewState, VIEW_STATE_KEY};
use crate::store::{MemoryStore, ViewStateStore};

/// Coarse controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportPhase {
    /// `init` has not succeeded yet, or `teardown` ran.
    Uninitialized,
    /// Waiting for input.
    Idle,
    /// A pan gesture is in progress.
    Dragging,
    /// A fit is waiting for the host's post-layout barrier.
    Rendering,
}

/// Result of a fit measurement at the post-layout barrier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitOutcome {
    /// Geometry was measurable and this transform was applied.
    Applied(TransformState),
    /// Nothing measurable; the previous transform was kept.
    Aborted,
}

#[derive(Clone, Copy, Debug)]
struct Surface {
    container: ElementId,
    content: ElementId,
}

/// Owns the scale/translation of a content element inside a fixed container.
///
/// All mutations of the live transform go through
/// [`ViewportController::apply_transform`], which commits to the host and then
/// writes the persisted record, so the persisted state never lags the live
/// one past the current call.
///
/// Fit-to-content is split around the host's layout pass: [`fit_to_content`]
/// clears the live transform and marks a measurement pending, and the host
/// calls [`after_layout`] once layout has settled. While that measurement is
/// pending, wheel zoom, button zoom and drag-start are ignored, and further
/// fit requests coalesce into it.
///
/// [`fit_to_content`]: ViewportController::fit_to_content
/// [`after_layout`]: ViewportController::after_layout
pub struct ViewportController<H> {
    host: H,
    config: ViewportConfig,
    limits: ScaleLimits,
    store: Box<dyn ViewStateStore>,
    clock: Box<dyn Clock>,
    surface: Option<Surface>,
    listeners: Vec<ListenerId>,
    transform: TransformState,
    interaction: InteractionState,
    is_rendering: bool,
}

impl<H: fmt::Debug> fmt::Debug for ViewportController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners)
            .field("transform", &self.transform)
            .field("interaction", &self.interaction)
            .field("is_rendering", &self.is_rendering)
            .finish_non_exhaustive()
    }
}

impl<H: ViewportHost> ViewportController<H> {
    /// Creates an uninitialized controller with an in-memory store and the
    /// system clock.
    #[must_use]
    pub fn new(host: H, config: ViewportConfig) -> Self {
        let config = config.normalized();
        Self {
            host,
            limits: config.limits(),
            config,
            store: Box::new(MemoryStore::new()),
            clock: Box::new(SystemClock),
            surface: None,
            listeners: Vec::new(),
            transform: TransformState::IDENTITY,
            interaction: InteractionState::default(),
            is_rendering: false,
        }
    }

    /// Replaces the durable store.
    #[must_use]
    pub fn with_store(mut self, store: impl ViewStateStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Resolves both elements, prepares the surface, subscribes to input and
    /// loads (without applying) any saved view. Without one the transform
    /// starts at identity.
    ///
    /// Calling this on an initialized controller tears the old binding down first.
    pub fn try_init(&mut self, container: &str, content: &str) -> Result<(), ViewportError> {
        if self.surface.is_some() {
            self.teardown();
        }
        let container_id =
            self.host
                .resolve(container)
                .ok_or_else(|| ViewportError::MissingElement {
                    role: ElementRole::Container,
                    selector: container.to_owned(),
                })?;
        let content_id = self
            .host
            .resolve(content)
            .ok_or_else(|| ViewportError::MissingElement {
                role: ElementRole::Content,
                selector: content.to_owned(),
            })?;

        self.host.prepare_surface(container_id, content_id);
        for kind in InputKind::ALL {
            let listener = self.host.subscribe(container_id, kind);
            self.listeners.push(listener);
        }
        self.surface = Some(Surface {
            container: container_id,
            content: content_id,
        });

        self.transform = TransformState::IDENTITY;
        let restored = self.load_state();
        info!(container, content, restored, "viewport initialized");
        Ok(())
    }

    /// Like [`try_init`](Self::try_init), reporting failure as `false`.
    pub fn init(&mut self, container: &str, content: &str) -> bool {
        match self.try_init(container, content) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "viewport initialization failed");
                false
            }
        }
    }

    /// Unsubscribes every listener and returns to [`ViewportPhase::Uninitialized`].
    ///
    /// Safe to call repeatedly. The persisted record is left alone.
    pub fn teardown(&mut self) {
        for listener in self.listeners.drain(..) {
            self.host.unsubscribe(listener);
        }
        self.interaction.end();
        self.is_rendering = false;
        if self.surface.take().is_some() {
            info!("viewport torn down");
        }
    }

    /// `true` between a successful `init` and `teardown`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ViewportPhase {
        if self.surface.is_none() {
            ViewportPhase::Uninitialized
        } else if self.is_rendering {
            ViewportPhase::Rendering
        } else if self.interaction.is_dragging() {
            ViewportPhase::Dragging
        } else {
            ViewportPhase::Idle
        }
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Active configuration (normalized).
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Pan gesture state.
    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current time from the controller's clock, in epoch milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Maps a content-space point to container pixels under the current transform.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.transform.content_to_view(pt)
    }

    /// Maps a container pixel to content space under the current transform.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        self.transform.view_to_content(pt)
    }

    /// The single mutation path: clamps the scale, commits to the host, then
    /// persists.
    pub fn apply_transform(&mut self, next: TransformState) {
        let Some(surface) = self.surface else {
            return;
        };
        if !next.is_valid() {
            warn!(?next, "rejected non-finite transform");
            return;
        }
        let next = TransformState {
            scale: self.limits.clamp(next.scale),
            ..next
        };
        self.transform = next;
        self.host.commit_transform(surface.content, next);
        debug!(
            scale = next.scale,
            translate_x = next.translate_x,
            translate_y = next.translate_y,
            "transform applied"
        );
        self.save_state();
    }

    /// Commits the current transform again, e.g. after the content element was
    /// replaced.
    pub fn reapply_transform(&mut self) {
        self.apply_transform(self.transform);
    }

    /// Sets the transform to scale 1, no translation.
    pub fn reset_zoom(&mut self) {
        self.apply_transform(TransformState::IDENTITY);
    }

    /// Zooms to `target_scale` (clamped) keeping the content point under
    /// `anchor` fixed.
    ///
    /// Returns `false`, with no commit and no persistence write, when the
    /// clamped scale equals the current one or a fit is pending.
    pub fn zoom_at(&mut self, anchor: Point, target_scale: f64) -> bool {
        if self.surface.is_none() || self.is_rendering || !target_scale.is_finite() {
            return false;
        }
        let scale = self.limits.clamp(target_scale);
        if (scale - self.transform.scale).abs() < f64::EPSILON {
            trace!(scale, "zoom at bound");
            return false;
        }
        self.apply_transform(self.transform.zoom_about(anchor, scale));
        true
    }

    /// Wheel zoom around the cursor. `delta_y` follows the DOM convention:
    /// positive scrolls down and zooms out.
    pub fn on_wheel(&mut self, cursor: Point, delta_y: f64) -> bool {
        let delta = -delta_y * self.config.wheel_sensitivity;
        self.zoom_at(cursor, self.transform.scale + delta)
    }

    /// One zoom step in, around the container center.
    pub fn zoom_in(&mut self) -> bool {
        let center = self.container_center();
        self.zoom_at(center, self.transform.scale + self.config.zoom_step)
    }

    /// One zoom step out, around the container center.
    pub fn zoom_out(&mut self) -> bool {
        let center = self.container_center();
        self.zoom_at(center, self.transform.scale - self.config.zoom_step)
    }

    fn container_center(&self) -> Point {
        self.surface
            .and_then(|s| self.host.container_size(s.container))
            .map_or(Point::ZERO, |size: Size| {
                Point::new(size.width / 2.0, size.height / 2.0)
            })
    }

    /// Starts a pan unless the pointer is over a graph node or a fit is pending.
    pub fn on_pointer_down(&mut self, pointer: Point, button: PointerButton) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        if self.is_rendering || button == PointerButton::Secondary {
            return false;
        }
        if self.host.is_interactive(surface.content, pointer) {
            return false;
        }
        self.interaction.begin(pointer, self.transform.translation());
        trace!(x = pointer.x, y = pointer.y, "pan started");
        true
    }

    /// Moves the pan. Scale is untouched.
    pub fn on_pointer_move(&mut self, pointer: Point) -> bool {
        match self.interaction.translation_for(pointer) {
            Some(translate) => {
                self.apply_transform(self.transform.with_translation(translate));
                true
            }
            None => false,
        }
    }

    /// Ends the pan, if any.
    pub fn on_pointer_up(&mut self) {
        if self.interaction.is_dragging() {
            self.interaction.end();
            trace!("pan ended");
        }
    }

    /// Container resized: re-frame only when there is no saved view to honor.
    pub fn on_resize(&mut self) -> bool {
        if self.surface.is_none() || self.has_saved_state() {
            return false;
        }
        self.fit_to_content()
    }

    /// Runs the command bound to a keyboard shortcut.
    pub fn on_key(&mut self, key: char) -> bool {
        ViewCommand::from_shortcut(key).is_some_and(|command| self.execute(command))
    }

    /// Runs an operator command. Returns `true` if it took effect or was scheduled.
    pub fn execute(&mut self, command: ViewCommand) -> bool {
        if self.surface.is_none() {
            return false;
        }
        match command {
            ViewCommand::ZoomIn => self.zoom_in(),
            ViewCommand::ZoomOut => self.zoom_out(),
            ViewCommand::Reset => {
                self.reset_zoom();
                true
            }
            ViewCommand::FitToContent => self.fit_to_content(),
            ViewCommand::ClearSavedPosition => {
                self.clear_saved_state();
                true
            }
        }
    }

    /// Starts a fit: clears the live transform so the content can be measured
    /// undistorted, and marks a measurement pending for [`after_layout`].
    ///
    /// A request while a measurement is already pending coalesces into it.
    /// Refused while a pan is in progress.
    ///
    /// [`after_layout`]: Self::after_layout
    pub fn fit_to_content(&mut self) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        if self.interaction.is_dragging() {
            debug!("fit refused while dragging");
            return false;
        }
        if self.is_rendering {
            trace!("fit already pending");
            return true;
        }
        self.is_rendering = true;
        self.host.commit_transform(surface.content, TransformState::IDENTITY);
        true
    }

    /// Post-layout barrier. Measures fresh geometry and applies the fit if one
    /// is pending; `None` when nothing was pending.
    ///
    /// When nothing is measurable the transform state is unchanged and the
    /// retained transform is re-committed to the host without a persistence
    /// write.
    pub fn after_layout(&mut self) -> Option<FitOutcome> {
        if !self.is_rendering {
            return None;
        }
        let surface = self.surface?;
        let outcome = match self.measure_fit(surface) {
            Some(fitted) => {
                self.apply_transform(fitted);
                FitOutcome::Applied(self.transform)
            }
            None => {
                warn!("fit aborted: content has no measurable size");
                self.host.commit_transform(surface.content, self.transform);
                FitOutcome::Aborted
            }
        };
        self.is_rendering = false;
        Some(outcome)
    }

    fn measure_fit(&self, surface: Surface) -> Option<TransformState> {
        let container = self.host.container_size(surface.container)?;
        let content = self.host.content_metrics(surface.content).resolve()?;
        let fitted = fit_content(container, &content, &self.config.fit_params());
        debug!(
            container_w = container.width,
            container_h = container.height,
            content_w = content.size.width,
            content_h = content.size.height,
            source = ?content.source,
            fitted = fitted.is_some(),
            "fit measured"
        );
        fitted
    }

    fn save_state(&mut self) {
        if !self.config.enable_persistence {
            return;
        }
        let record = PersistedViewState::capture(&self.transform, self.clock.now_ms());
        let result = serde_json::to_string(&record)
            .map_err(StoreError::from)
            .and_then(|json| self.store.save(VIEW_STATE_KEY, &json));
        if let Err(err) = result {
            warn!(%err, "failed to save view state");
        }
    }

    fn read_state(&self) -> Option<PersistedViewState> {
        let raw = match self.store.load(VIEW_STATE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(%err, "failed to read view state");
                return None;
            }
        };
        let record = PersistedViewState::decode(&raw);
        if record.is_none() {
            debug!("ignoring unreadable view state record");
        }
        record
    }

    /// Reads the persisted view into the transform state without applying it.
    ///
    /// An expired record is deleted. Returns `true` if a fresh record was loaded.
    pub fn load_state(&mut self) -> bool {
        if !self.config.enable_persistence {
            return false;
        }
        let Some(record) = self.read_state() else {
            return false;
        };
        if !record.is_fresh(self.clock.now_ms()) {
            info!(timestamp = record.timestamp, "discarding expired view state");
            if let Err(err) = self.store.remove(VIEW_STATE_KEY) {
                warn!(%err, "failed to delete expired view state");
            }
            return false;
        }
        let restored = record.transform();
        self.transform = TransformState {
            scale: self.limits.clamp(restored.scale),
            ..restored
        };
        info!(
            scale = self.transform.scale,
            translate_x = self.transform.translate_x,
            translate_y = self.transform.translate_y,
            "view state restored"
        );
        true
    }

    /// `true` if a fresh persisted record exists. Never mutates anything.
    #[must_use]
    pub fn has_saved_state(&self) -> bool {
        self.config.enable_persistence
            && self
                .read_state()
                .is_some_and(|record| record.is_fresh(self.clock.now_ms()))
    }

    /// Deletes the persisted record and requests a fresh fit.
    pub fn clear_saved_state(&mut self) {
        if let Err(err) = self.store.remove(VIEW_STATE_KEY) {
            warn!(%err, "failed to clear view state");
        }
        info!("saved view cleared");
        self.fit_to_content();
    }
}
