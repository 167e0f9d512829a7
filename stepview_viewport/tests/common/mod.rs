// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use stepview_viewport::{
    ContentMetrics, ElementId, InputKind, ListenerId, ManualClock, MemoryStore, StoreError,
    TransformState, ViewStateStore, ViewportConfig, ViewportController, ViewportHost,
};

pub const CONTAINER: &str = "#graph-container";
pub const CONTENT: &str = "#graph";
pub const T0: u64 = 1_760_000_000_000;

#[derive(Debug)]
pub struct HostState {
    pub container_size: Option<Size>,
    pub metrics: ContentMetrics,
    pub live: TransformState,
    pub commits: Vec<TransformState>,
    pub prepared: Option<(ElementId, ElementId)>,
    pub listeners: Vec<(ListenerId, InputKind)>,
    pub next_listener: u64,
    /// Clickable node regions, in container pixels.
    pub nodes: Vec<Rect>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            container_size: Some(Size::new(800.0, 600.0)),
            metrics: ContentMetrics {
                bounding_box: Some(Rect::new(0.0, 0.0, 1000.0, 500.0)),
                ..ContentMetrics::default()
            },
            live: TransformState::IDENTITY,
            commits: Vec::new(),
            prepared: None,
            listeners: Vec::new(),
            next_listener: 1,
            nodes: Vec::new(),
        }
    }
}

/// A host whose state the test keeps a handle to.
#[derive(Clone, Debug, Default)]
pub struct FakeHost(pub Rc<RefCell<HostState>>);

impl FakeHost {
    pub fn state(&self) -> std::cell::RefMut<'_, HostState> {
        self.0.borrow_mut()
    }

    pub fn set_content_size(&self, w: f64, h: f64) {
        self.state().metrics = ContentMetrics {
            bounding_box: Some(Rect::new(0.0, 0.0, w, h)),
            ..ContentMetrics::default()
        };
    }

    pub fn commit_count(&self) -> usize {
        self.0.borrow().commits.len()
    }

    pub fn live(&self) -> TransformState {
        self.0.borrow().live
    }
}

impl ViewportHost for FakeHost {
    fn resolve(&self, selector: &str) -> Option<ElementId> {
        match selector {
            CONTAINER => Some(ElementId(1)),
            CONTENT => Some(ElementId(2)),
            _ => None,
        }
    }

    fn prepare_surface(&mut self, container: ElementId, content: ElementId) {
        self.state().prepared = Some((container, content));
    }

    fn container_size(&self, _container: ElementId) -> Option<Size> {
        self.0.borrow().container_size
    }

    fn content_metrics(&self, _content: ElementId) -> ContentMetrics {
        self.0.borrow().metrics
    }

    fn commit_transform(&mut self, _content: ElementId, transform: TransformState) {
        let mut state = self.state();
        state.live = transform;
        state.commits.push(transform);
    }

    fn is_interactive(&self, _content: ElementId, point: Point) -> bool {
        self.0.borrow().nodes.iter().any(|r| r.contains(point))
    }

    fn subscribe(&mut self, _container: ElementId, kind: InputKind) -> ListenerId {
        let mut state = self.state();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, kind));
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.state().listeners.retain(|(id, _)| *id != listener);
    }
}

/// A store the test can inspect while the controller owns a clone.
#[derive(Clone, Debug, Default)]
pub struct SharedStore(pub Rc<RefCell<MemoryStore>>);

impl SharedStore {
    pub fn raw(&self) -> Option<String> {
        self.0
            .borrow()
            .load(stepview_viewport::VIEW_STATE_KEY)
            .unwrap()
    }

    pub fn record(&self) -> Option<stepview_viewport::PersistedViewState> {
        self.raw()
            .and_then(|raw| stepview_viewport::PersistedViewState::decode(&raw))
    }

    pub fn put(&self, record: &stepview_viewport::PersistedViewState) {
        self.0
            .borrow_mut()
            .save(
                stepview_viewport::VIEW_STATE_KEY,
                &serde_json::to_string(record).unwrap(),
            )
            .unwrap();
    }
}

impl ViewStateStore for SharedStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.borrow().load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().save(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().remove(key)
    }
}

/// A store that always fails, like a full or disabled browser storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrokenStore;

impl ViewStateStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}

pub struct Fixture {
    pub host: FakeHost,
    pub store: SharedStore,
    pub clock: ManualClock,
    pub viewport: ViewportController<FakeHost>,
}

pub fn fixture_with(config: ViewportConfig) -> Fixture {
    let host = FakeHost::default();
    let store = SharedStore::default();
    let clock = ManualClock::new(T0);
    let viewport = ViewportController::new(host.clone(), config)
        .with_store(store.clone())
        .with_clock(clock.clone());
    Fixture {
        host,
        store,
        clock,
        viewport,
    }
}

/// An initialized controller with default configuration and no saved state.
pub fn fixture() -> Fixture {
    let mut f = fixture_with(ViewportConfig::default());
    assert!(f.viewport.init(CONTAINER, CONTENT));
    f
}

pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

pub fn assert_point_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}
