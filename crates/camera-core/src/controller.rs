//! The camera motion controller: orbit, parallax and drag rotation blended
//! into one smoothed camera path.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use crate::camera::CameraHandle;
use crate::config::CameraConfig;
use crate::error::Result;
use crate::input::{InputMode, InputSnapshot, InputTracker, PointerInput, Rotation};
use crate::lifecycle::{PointerSource, Subscription};
use crate::orbit;
use crate::pose::{self, ParallaxSettings};

/// Target pose for one frame, before smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Owns the configuration and the input tracker, and moves a camera every frame.
///
/// # Lifecycle
///
/// 1. [`CameraController::mount`] validates the config and, when
///    `mouse_controlled` is set, subscribes to a [`PointerSource`].
/// 2. Call [`CameraController::update`] once per render tick.
/// 3. [`CameraController::unmount`] (or dropping the controller) detaches the
///    listeners and resets the input state.
pub struct CameraController {
    config: CameraConfig,
    input: Rc<RefCell<InputTracker>>,
    subscription: Option<Subscription>,
}

impl CameraController {
    /// Build a controller without attaching any listeners.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        let tracker = if config.mouse_controlled {
            InputTracker::new(true, config.drag_sensitivity, config.phi_clamp_radians)
        } else {
            InputTracker::disabled()
        };
        Ok(Self {
            config,
            input: Rc::new(RefCell::new(tracker)),
            subscription: None,
        })
    }

    pub fn mount<S: PointerSource + ?Sized>(config: CameraConfig, source: &S) -> Result<Self> {
        let mut controller = Self::new(config)?;
        controller.attach(source)?;
        Ok(controller)
    }

    /// Subscribe to pointer events. Does nothing when input is disabled or a
    /// subscription is already held.
    pub fn attach<S: PointerSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        if !self.config.mouse_controlled {
            log::debug!("[camera] mouse control disabled; no listeners attached");
            return Ok(());
        }
        if self.subscription.is_some() {
            return Ok(());
        }
        // Handlers must not keep the tracker alive past unmount.
        let tracker = Rc::downgrade(&self.input);
        let subscription = source.subscribe(Box::new(move |event| {
            if let Some(tracker) = tracker.upgrade() {
                tracker.borrow_mut().handle(event);
            }
        }))?;
        self.subscription = Some(subscription);
        log::debug!("[camera] pointer listeners attached");
        Ok(())
    }

    /// Detach listeners and forget rotation, drag and pointer state.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.detach();
            log::debug!("[camera] pointer listeners detached");
        }
        self.input.borrow_mut().reset();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Feed an event directly, bypassing any subscription.
    pub fn handle_pointer(&self, event: PointerInput) {
        self.input.borrow_mut().handle(event);
    }

    pub fn mode(&self) -> InputMode {
        self.input.borrow().mode()
    }

    pub fn rotation(&self) -> Rotation {
        self.input.borrow().rotation()
    }

    pub fn input_snapshot(&self) -> InputSnapshot {
        self.input.borrow().snapshot()
    }

    #[inline]
    fn scaled_time(&self, elapsed: f64) -> f32 {
        orbit::scaled_clock(elapsed, self.config.time_scale)
    }

    fn parallax(&self) -> ParallaxSettings {
        ParallaxSettings {
            enabled: self.config.mouse_controlled,
            strength: self.config.parallax_strength,
            depth_strength: self.config.depth_strength,
        }
    }

    /// Unsmoothed target pose at `elapsed` seconds for the given input state.
    pub fn pose_for(&self, elapsed: f64, input: &InputSnapshot) -> Option<FramePose> {
        let t = self.scaled_time(elapsed);
        let base = orbit::orbit_offset(t, &self.config.orbit_radii);
        let position = pose::compose_target(base, input, self.parallax())?;
        Some(FramePose {
            position,
            look_at: orbit::look_at_target(t),
        })
    }

    /// Unsmoothed target pose at `elapsed` seconds for the current input state.
    pub fn target_at(&self, elapsed: f64) -> Option<FramePose> {
        let input = self.input_snapshot();
        self.pose_for(elapsed, &input)
    }

    /// Advance the camera one frame.
    ///
    /// Moves the camera a `filter_factor` fraction of the way to the target and
    /// points it at the look-at target. Returns the new position, or `None`
    /// when the frame was skipped and the camera left untouched.
    pub fn update<C: CameraHandle + ?Sized>(&self, elapsed: f64, camera: &mut C) -> Option<Vec3> {
        let Some(pose) = self.target_at(elapsed) else {
            log::trace!("[camera] skipped degenerate frame at t={elapsed:.3}");
            return None;
        };
        let current = camera.position();
        let next = pose::low_pass(current, pose.position, self.config.filter_factor);
        if !next.is_finite() {
            log::trace!("[camera] skipped non-finite position at t={elapsed:.3}");
            return None;
        }
        camera.set_position(next);
        camera.look_at(pose.look_at);
        Some(next)
    }
}

impl Drop for CameraController {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("config", &self.config)
            .field("input", &self.input.borrow().snapshot())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}
