use glam::Vec3;
use log::{debug, info, warn};

use crate::camera::{Camera, CameraPose};

use super::free_fly::{FreeFlyIntegrator, KeyState, MouseLook};
use super::orbit::OrbitController;
use super::pointer::{HostRequest, PointerCapture};

/// How far in front of the camera the orbit pivot lands when leaving free-fly
pub const CONTINUITY_DISTANCE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Orbit,
    FreeFly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Toggle,
    CaptureLost,
    ResetView,
}

/// Owns the camera and the two controllers that take turns driving it.
///
/// Exactly one controller runs per frame, selected by `mode`. The other keeps
/// whatever state it had when it was switched off. Pointer capture requests
/// are pushed to an outbox the caller drains and executes against the host.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    home: CameraPose,
    mode: CameraMode,
    capture: PointerCapture,
    orbit: OrbitController,
    integrator: FreeFlyIntegrator,
    mouse_look: MouseLook,
}

impl CameraRig {
    pub fn new(home: CameraPose, move_speed: f32) -> Self {
        Self {
            camera: Camera::from_pose(&home),
            home,
            mode: CameraMode::Orbit,
            capture: PointerCapture::Idle,
            orbit: OrbitController::new(home.target),
            integrator: FreeFlyIntegrator::new(move_speed),
            mouse_look: MouseLook::default(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn home(&self) -> &CameraPose {
        &self.home
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn capture(&self) -> PointerCapture {
        self.capture
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.orbit.target
    }

    pub fn toggle_free_camera(&mut self, out: &mut Vec<HostRequest>) -> CameraMode {
        match self.mode {
            CameraMode::Orbit => self.enter_free_fly(out),
            CameraMode::FreeFly => self.exit_free_fly(ExitReason::Toggle, out),
        }
        self.mode
    }

    /// Hand the camera to the free-fly controller and ask for the pointer.
    /// Mouse look stays inert until the host acknowledges.
    pub fn enter_free_fly(&mut self, out: &mut Vec<HostRequest>) {
        if self.mode == CameraMode::FreeFly {
            return;
        }
        self.mode = CameraMode::FreeFly;
        self.capture = PointerCapture::Requested;
        out.push(HostRequest::AcquirePointer);
        info!("camera mode Orbit -> FreeFly");
    }

    /// Give the camera back to the orbit controller with the pivot placed
    /// straight ahead, so the view does not jump.
    pub fn exit_free_fly(&mut self, reason: ExitReason, out: &mut Vec<HostRequest>) {
        if self.mode == CameraMode::Orbit {
            return;
        }
        self.mode = CameraMode::Orbit;
        if reason != ExitReason::CaptureLost && self.capture != PointerCapture::Idle {
            out.push(HostRequest::ReleasePointer);
        }
        self.capture = PointerCapture::Idle;

        let pivot = self.camera.position + self.camera.forward() * CONTINUITY_DISTANCE;
        self.orbit.retarget(&mut self.camera, pivot);
        info!("camera mode FreeFly -> Orbit ({:?})", reason);
    }

    /// Host confirmed the capture request
    pub fn capture_granted(&mut self, out: &mut Vec<HostRequest>) {
        match self.mode {
            CameraMode::FreeFly => {
                self.capture = PointerCapture::Active;
                debug!("pointer capture active");
            }
            CameraMode::Orbit => {
                // Answer to a request abandoned by a mode switch
                debug!("late pointer capture grant, releasing");
                self.capture = PointerCapture::Idle;
                out.push(HostRequest::ReleasePointer);
            }
        }
    }

    /// Host refused the capture request. Free-fly stays selected so the user can retry.
    pub fn capture_denied(&mut self) {
        if self.capture == PointerCapture::Requested {
            warn!("pointer capture denied by host");
            self.capture = PointerCapture::Idle;
        }
    }

    /// Host took the pointer back on its own. Always ends free-fly.
    pub fn capture_lost(&mut self, out: &mut Vec<HostRequest>) {
        debug!("pointer capture lost in {:?}", self.mode);
        self.capture = PointerCapture::Idle;
        self.exit_free_fly(ExitReason::CaptureLost, out);
    }

    /// Ask again after a denial
    pub fn retry_capture(&mut self, out: &mut Vec<HostRequest>) {
        if self.mode == CameraMode::FreeFly && self.capture == PointerCapture::Idle {
            self.capture = PointerCapture::Requested;
            out.push(HostRequest::AcquirePointer);
            debug!("pointer capture requested again");
        }
    }

    /// Back to the startup pose in orbit mode, whatever happened before
    pub fn reset_view(&mut self, out: &mut Vec<HostRequest>) {
        self.exit_free_fly(ExitReason::ResetView, out);
        self.camera.up = self.home.up;
        self.camera.position = self.home.position;
        self.orbit.retarget(&mut self.camera, self.home.target);
        info!("camera view reset");
    }

    /// Relative mouse counts, honored only while capture is held
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.mode == CameraMode::FreeFly && self.capture.is_active() {
            self.mouse_look.apply(&mut self.camera, dx, dy);
        }
    }

    pub fn orbit_rotate(&mut self, dx: f32, dy: f32) {
        if self.mode == CameraMode::Orbit {
            self.orbit.rotate(dx, dy);
        }
    }

    pub fn orbit_pan(&mut self, dx: f32, dy: f32) {
        if self.mode == CameraMode::Orbit {
            self.orbit.pan(&self.camera, dx, dy);
        }
    }

    pub fn orbit_dolly(&mut self, steps: f32) {
        if self.mode == CameraMode::Orbit {
            self.orbit.dolly(steps);
        }
    }

    /// Run the active controller for one frame
    pub fn update(&mut self, keys: &KeyState, delta: f32) {
        match self.mode {
            CameraMode::Orbit => self.orbit.update(&mut self.camera),
            CameraMode::FreeFly => {
                if self.capture.is_active() {
                    self.camera.position = self.integrator.integrate(&self.camera, keys, delta);
                }
            }
        }
    }
}
