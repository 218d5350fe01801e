//! Listener and frame-callback registration.
//!
//! Every registration hands back a [`Subscription`] guard; dropping or
//! detaching the guard removes the registration exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::Result;
use crate::input::PointerInput;

pub type PointerHandler = Box<dyn FnMut(PointerInput)>;
/// Invoked once per render tick with the elapsed time in seconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Detaches a registration when dropped.
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to undo.
    pub fn empty() -> Self {
        Self { detach: None }
    }

    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Source of window-level pointer press/move/release events.
pub trait PointerSource {
    fn subscribe(&self, handler: PointerHandler) -> Result<Subscription>;
}

/// Host render loop that calls back once per frame.
pub trait FrameScheduler {
    fn register(&self, callback: FrameCallback) -> Result<Subscription>;
}

/// Registry shared between a manual source and its subscription guards.
struct Registry<T: ?Sized> {
    next_id: Cell<u64>,
    slots: RefCell<Vec<(u64, Rc<RefCell<T>>)>>,
}

impl<T: ?Sized + 'static> Registry<T> {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            next_id: Cell::new(0),
            slots: RefCell::new(Vec::new()),
        })
    }

    fn insert(self: &Rc<Self>, value: Rc<RefCell<T>>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push((id, value));
        let registry = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.slots.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
            }
        })
    }

    fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    // Cloned out so callbacks may subscribe or detach while being dispatched.
    fn live(&self) -> Vec<(u64, Rc<RefCell<T>>)> {
        self.slots.borrow().clone()
    }

    fn contains(&self, id: u64) -> bool {
        self.slots.borrow().iter().any(|(slot_id, _)| *slot_id == id)
    }
}

/// Pointer source fed by the host, for embedders that forward events themselves.
#[derive(Clone)]
pub struct ManualPointerSource {
    registry: Rc<Registry<dyn FnMut(PointerInput)>>,
}

impl Default for ManualPointerSource {
    fn default() -> Self {
        Self {
            registry: Registry::new(),
        }
    }
}

impl ManualPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one event to every attached handler.
    pub fn emit(&self, event: PointerInput) {
        for (id, handler) in self.registry.live() {
            if self.registry.contains(id) {
                (&mut *handler.borrow_mut())(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }
}

impl PointerSource for ManualPointerSource {
    fn subscribe(&self, handler: PointerHandler) -> Result<Subscription> {
        let handler: Rc<RefCell<dyn FnMut(PointerInput)>> = Rc::new(RefCell::new(handler));
        Ok(self.registry.insert(handler))
    }
}

/// Frame scheduler ticked by the host.
#[derive(Clone)]
pub struct ManualScheduler {
    registry: Rc<Registry<dyn FnMut(f64)>>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self {
            registry: Registry::new(),
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every registered callback once for this frame.
    pub fn tick(&self, elapsed: f64) {
        for (id, callback) in self.registry.live() {
            if self.registry.contains(id) {
                (&mut *callback.borrow_mut())(elapsed);
            }
        }
    }

    pub fn callback_count(&self) -> usize {
        self.registry.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn register(&self, callback: FrameCallback) -> Result<Subscription> {
        let callback: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(callback));
        Ok(self.registry.insert(callback))
    }
}
