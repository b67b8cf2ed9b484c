use glam::Mat4;
use log::info;

use crate::camera::{Camera, CameraPose};
use crate::core::free_fly::{KeyState, MoveKey};
use crate::core::input_adapter::PointerDrag;
use crate::core::orientation::{MappedOrientation, OrientationMapper, OrientationSample};
use crate::core::playback::PlaybackClock;
use crate::core::pointer::HostRequest;
use crate::core::rig::{CameraMode, CameraRig};
use crate::hud::HudSink;

/// User-level commands, from the keyboard or from the UI panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerAction {
    TogglePlay,
    SetPlaying(bool),
    SetSpeed(f64),
    Scrub(usize),
    StepBackward,
    StepForward,
    ToggleFreeCamera,
    ResetView,
    Move(MoveKey, bool),
    /// Host revoked the pointer (Escape, grab dropped)
    CaptureLost,
    /// Window lost keyboard focus
    FocusLost,
    RetryCapture,
}

/// Everything the render loop owns: the sample sequence, the playback clock,
/// the camera rig and the held movement keys.
///
/// Collaborators are handed in per call (the HUD sink) or handed out (pointer
/// requests) so no component reaches for shared state.
#[derive(Debug, Clone)]
pub struct Session {
    samples: Vec<OrientationSample>,
    clock: PlaybackClock,
    rig: CameraRig,
    keys: KeyState,
    shown: Option<MappedOrientation>,
    requests: Vec<HostRequest>,
}

impl Session {
    pub fn new(home: CameraPose, move_speed: f32) -> Self {
        Self {
            samples: Vec::new(),
            clock: PlaybackClock::new(0),
            rig: CameraRig::new(home, move_speed),
            keys: KeyState::default(),
            shown: None,
            requests: Vec::new(),
        }
    }

    /// Replace the sequence wholesale and show its first sample
    pub fn load(&mut self, samples: Vec<OrientationSample>, hud: &mut impl HudSink) {
        info!("loaded {} orientation samples", samples.len());
        self.samples = samples;
        self.clock.reset(self.samples.len());
        self.shown = None;
        match self.clock.index() {
            Some(index) => self.show(index, hud),
            None => hud.show_no_data(),
        }
    }

    /// One animation frame: clock, then mapping, then camera
    pub fn frame(&mut self, delta: f32, hud: &mut impl HudSink) {
        if let Some(index) = self.clock.tick(delta) {
            self.show(index, hud);
        }
        self.rig.update(&self.keys, delta);
    }

    pub fn apply(&mut self, action: ViewerAction, hud: &mut impl HudSink) {
        match action {
            ViewerAction::TogglePlay => {
                let playing = self.clock.toggle_playing();
                info!("playback {}", if playing { "playing" } else { "paused" });
            }
            ViewerAction::SetPlaying(playing) => self.clock.set_playing(playing),
            ViewerAction::SetSpeed(speed) => self.clock.set_speed(speed),
            ViewerAction::Scrub(index) => self.scrub(index, hud),
            ViewerAction::StepBackward => {
                if let Some(index) = self.clock.index() {
                    self.scrub(index.saturating_sub(1), hud);
                }
            }
            ViewerAction::StepForward => {
                if let Some(index) = self.clock.index() {
                    self.scrub(index + 1, hud);
                }
            }
            ViewerAction::ToggleFreeCamera => {
                self.rig.toggle_free_camera(&mut self.requests);
            }
            ViewerAction::ResetView => self.rig.reset_view(&mut self.requests),
            ViewerAction::Move(key, pressed) => self.keys.set(key, pressed),
            ViewerAction::CaptureLost => self.rig.capture_lost(&mut self.requests),
            ViewerAction::FocusLost => {
                self.keys = KeyState::default();
                if self.rig.capture().is_active() {
                    self.rig.capture_lost(&mut self.requests);
                }
            }
            ViewerAction::RetryCapture => self.rig.retry_capture(&mut self.requests),
        }
    }

    /// Jump to a sample, reflected immediately even while playing
    pub fn scrub(&mut self, index: usize, hud: &mut impl HudSink) {
        if let Some(index) = self.clock.set_index(index) {
            self.show(index, hud);
        }
    }

    /// Orbit drag gestures gathered by the input adapter
    pub fn apply_drag(&mut self, drag: PointerDrag) {
        if drag.is_empty() {
            return;
        }
        self.rig.orbit_rotate(drag.rotate.0, drag.rotate.1);
        self.rig.orbit_pan(drag.pan.0, drag.pan.1);
        self.rig.orbit_dolly(drag.dolly);
    }

    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.rig.mouse_motion(dx, dy);
    }

    /// Host answered the last pointer request
    pub fn capture_resolved(&mut self, granted: bool) {
        if granted {
            self.rig.capture_granted(&mut self.requests);
        } else {
            self.rig.capture_denied();
        }
    }

    /// Pointer requests the host still has to execute, oldest first
    pub fn take_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn samples(&self) -> &[OrientationSample] {
        &self.samples
    }

    pub fn playback(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    pub fn mode(&self) -> CameraMode {
        self.rig.mode()
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn current_sample(&self) -> Option<&OrientationSample> {
        self.clock.index().and_then(|index| self.samples.get(index))
    }

    /// Last mapped orientation, `None` until a sample has been shown
    pub fn shown(&self) -> Option<&MappedOrientation> {
        self.shown.as_ref()
    }

    /// Proxy model matrix; identity while nothing is shown
    pub fn proxy_transform(&self) -> Mat4 {
        self.shown
            .map(|mapped| mapped.rotation.to_matrix())
            .unwrap_or(Mat4::IDENTITY)
    }

    fn show(&mut self, index: usize, hud: &mut impl HudSink) {
        let Some(sample) = self.samples.get(index) else {
            return;
        };
        let mapped = OrientationMapper::map(sample);
        hud.show_sample(index, sample, &mapped.hud);
        self.shown = Some(mapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudText;

    fn samples(n: usize) -> Vec<OrientationSample> {
        (0..n)
            .map(|i| OrientationSample::new(i as f64 * 10.0, i as f64 * 0.01, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn empty_load_reports_no_data_and_disables_play() {
        let mut session = Session::new(CameraPose::default(), 3.0);
        let mut hud = HudText::new();
        session.load(Vec::new(), &mut hud);
        session.apply(ViewerAction::TogglePlay, &mut hud);
        assert!(!session.playback().state().playing);
        assert!(hud.message.is_some());
        assert_eq!(session.proxy_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn step_actions_stay_in_range() {
        let mut session = Session::new(CameraPose::default(), 3.0);
        let mut hud = HudText::new();
        session.load(samples(3), &mut hud);
        session.apply(ViewerAction::StepBackward, &mut hud);
        assert_eq!(session.playback().index(), Some(0));
        for _ in 0..5 {
            session.apply(ViewerAction::StepForward, &mut hud);
        }
        assert_eq!(session.playback().index(), Some(2));
        assert_eq!(hud.index, Some(2));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut session = Session::new(CameraPose::default(), 3.0);
        let mut hud = HudText::new();
        session.apply(ViewerAction::Move(MoveKey::Forward, true), &mut hud);
        assert!(session.keys().forward);
        session.apply(ViewerAction::FocusLost, &mut hud);
        assert!(!session.keys().any());
    }

    #[test]
    fn requests_are_drained_once() {
        let mut session = Session::new(CameraPose::default(), 3.0);
        let mut hud = HudText::new();
        session.apply(ViewerAction::ToggleFreeCamera, &mut hud);
        assert_eq!(session.take_host_requests(), vec![HostRequest::AcquirePointer]);
        assert!(session.take_host_requests().is_empty());
    }
}
