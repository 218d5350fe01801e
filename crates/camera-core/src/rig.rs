//! Binds a controller and a camera to a frame scheduler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec3;

use crate::camera::CameraHandle;
use crate::controller::CameraController;
use crate::error::Result;
use crate::input::InputMode;
use crate::lifecycle::{FrameScheduler, Subscription};

/// What happened on one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub elapsed: f64,
    /// `None` when the frame was skipped or the camera is gone.
    pub position: Option<Vec3>,
    pub mode: InputMode,
}

pub type FrameObserver = Box<dyn FnMut(&FrameReport)>;

struct RigState<C: ?Sized> {
    controller: CameraController,
    camera: Weak<RefCell<C>>,
    observers: Vec<FrameObserver>,
}

impl<C: CameraHandle + ?Sized> RigState<C> {
    fn tick(&mut self, elapsed: f64) -> FrameReport {
        // The camera may be torn down by the engine between frames.
        let position = match self.camera.upgrade() {
            Some(camera) => self.controller.update(elapsed, &mut *camera.borrow_mut()),
            None => None,
        };
        let report = FrameReport {
            elapsed,
            position,
            mode: self.controller.mode(),
        };
        for observer in &mut self.observers {
            observer(&report);
        }
        report
    }
}

/// A controller driving a weakly held camera, optionally from a scheduler.
///
/// The rig never keeps the camera alive; once the owner drops it every tick
/// is a no-op. Dropping the rig removes its frame callback and, through the
/// controller, its pointer listeners.
pub struct CameraRig<C: CameraHandle + ?Sized + 'static> {
    state: Rc<RefCell<RigState<C>>>,
    frame: Option<Subscription>,
}

impl<C: CameraHandle + ?Sized + 'static> CameraRig<C> {
    pub fn new(controller: CameraController, camera: &Rc<RefCell<C>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(RigState {
                controller,
                camera: Rc::downgrade(camera),
                observers: Vec::new(),
            })),
            frame: None,
        }
    }

    /// Called after every tick with the outcome.
    pub fn observe(&mut self, observer: impl FnMut(&FrameReport) + 'static) {
        self.state.borrow_mut().observers.push(Box::new(observer));
    }

    /// Register with `scheduler`. A rig already running keeps its registration.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &S) -> Result<()> {
        if self.frame.is_some() {
            return Ok(());
        }
        let state = Rc::downgrade(&self.state);
        let subscription = scheduler.register(Box::new(move |elapsed| {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().tick(elapsed);
            }
        }))?;
        self.frame = Some(subscription);
        log::debug!("[rig] frame callback registered");
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.frame.take() {
            subscription.detach();
            log::debug!("[rig] frame callback removed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Advance one frame manually, for hosts that own their render loop.
    pub fn tick(&self, elapsed: f64) -> FrameReport {
        self.state.borrow_mut().tick(elapsed)
    }

    pub fn with_controller<R>(&self, f: impl FnOnce(&mut CameraController) -> R) -> R {
        f(&mut self.state.borrow_mut().controller)
    }

    /// Stop ticking and detach the controller's listeners.
    pub fn unmount(&mut self) {
        self.stop();
        self.state.borrow_mut().controller.unmount();
    }
}

impl<C: CameraHandle + ?Sized + 'static> Drop for CameraRig<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
