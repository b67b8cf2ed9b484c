use std::f32::consts::PI;

use glam::Vec3;

use crate::camera::Camera;

pub const DAMPING_FACTOR: f32 = 0.05;
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 200.0;

const ROTATE_SPEED: f32 = 0.005; // radians per pixel
const PAN_SPEED: f32 = 0.0015; // world units per pixel per unit of distance
const DOLLY_STEP: f32 = 0.95;
const POLAR_MARGIN: f32 = 1e-3;
const MOTION_EPSILON: f32 = 1e-6;

/// Inspection camera that circles a pivot point with world +Z as up.
///
/// Pointer input only queues motion; `update` turns the queue into a new
/// camera pose, bleeding it off gradually when damping is on.
#[derive(Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping: f32,
    azimuth_delta: f32,
    polar_delta: f32,
    pan_delta: Vec3,
    scale: f32,
}

impl OrbitController {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            damping: DAMPING_FACTOR,
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            pan_delta: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Drag in pixels: horizontal swings around the pivot, vertical raises or lowers
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth_delta -= dx * ROTATE_SPEED;
        self.polar_delta -= dy * ROTATE_SPEED;
    }

    /// Drag in pixels, moving pivot and camera together in the view plane
    pub fn pan(&mut self, camera: &Camera, dx: f32, dy: f32) {
        let distance = (camera.position - self.target).length();
        let right = camera.right();
        let screen_up = right.cross(camera.forward());
        self.pan_delta += (screen_up * dy - right * dx) * distance * PAN_SPEED;
    }

    /// Positive steps move toward the pivot
    pub fn dolly(&mut self, steps: f32) {
        self.scale *= DOLLY_STEP.powf(steps);
    }

    pub fn has_pending_motion(&self) -> bool {
        self.azimuth_delta.abs() > MOTION_EPSILON
            || self.polar_delta.abs() > MOTION_EPSILON
            || self.pan_delta.length() > MOTION_EPSILON
            || (self.scale - 1.0).abs() > MOTION_EPSILON
    }

    pub fn clear_motion(&mut self) {
        self.azimuth_delta = 0.0;
        self.polar_delta = 0.0;
        self.pan_delta = Vec3::ZERO;
        self.scale = 1.0;
    }

    /// Move the pivot without any transition, dropping queued motion
    pub fn retarget(&mut self, camera: &mut Camera, target: Vec3) {
        self.target = target;
        self.clear_motion();
        camera.look_at(target);
    }

    pub fn update(&mut self, camera: &mut Camera) {
        if !self.has_pending_motion() {
            // Nothing queued: aim only, the position must stay bit-exact
            self.clear_motion();
            camera.look_at(self.target);
            return;
        }

        let share = if self.damping > 0.0 { self.damping } else { 1.0 };

        let offset = camera.position - self.target;
        let radius = offset.length();
        let azimuth = offset.y.atan2(offset.x) + self.azimuth_delta * share;
        let polar = if radius > 0.0 {
            (offset.z / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };
        let polar = (polar + self.polar_delta * share).clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
        let radius = (radius * self.scale).clamp(MIN_DISTANCE, MAX_DISTANCE);

        self.target += self.pan_delta * share;
        camera.position = self.target
            + Vec3::new(
                radius * polar.sin() * azimuth.cos(),
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
            );
        camera.look_at(self.target);

        let keep = 1.0 - share;
        self.azimuth_delta = settle(self.azimuth_delta * keep);
        self.polar_delta = settle(self.polar_delta * keep);
        self.pan_delta *= keep;
        if self.pan_delta.length() <= MOTION_EPSILON {
            self.pan_delta = Vec3::ZERO;
        }
        self.scale = 1.0;
    }
}

fn settle(value: f32) -> f32 {
    if value.abs() <= MOTION_EPSILON {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;

    fn setup() -> (OrbitController, Camera) {
        let pose = CameraPose::default();
        (OrbitController::new(pose.target), Camera::from_pose(&pose))
    }

    fn settle_all(orbit: &mut OrbitController, camera: &mut Camera) {
        for _ in 0..2000 {
            orbit.update(camera);
        }
    }

    #[test]
    fn idle_update_keeps_position_exactly() {
        let (mut orbit, mut camera) = setup();
        let before = camera.position;
        orbit.update(&mut camera);
        orbit.update(&mut camera);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn rotate_keeps_distance_to_target() {
        let (mut orbit, mut camera) = setup();
        let distance = camera.position.distance(orbit.target);
        orbit.rotate(120.0, 0.0);
        settle_all(&mut orbit, &mut camera);
        assert!(!orbit.has_pending_motion());
        assert!((camera.position.distance(orbit.target) - distance).abs() < 1e-3);
        assert!(camera.position.x.abs() > 0.1);
    }

    #[test]
    fn damping_spreads_motion_over_frames() {
        let (mut orbit, mut camera) = setup();
        orbit.rotate(100.0, 0.0);
        orbit.update(&mut camera);
        assert!(orbit.has_pending_motion());
    }

    #[test]
    fn no_damping_applies_in_one_update() {
        let (mut orbit, mut camera) = setup();
        orbit.damping = 0.0;
        orbit.rotate(100.0, 0.0);
        orbit.update(&mut camera);
        assert!(!orbit.has_pending_motion());
    }

    #[test]
    fn dolly_moves_toward_target_within_limits() {
        let (mut orbit, mut camera) = setup();
        let distance = camera.position.distance(orbit.target);
        orbit.dolly(2.0);
        orbit.update(&mut camera);
        let closer = camera.position.distance(orbit.target);
        assert!(closer < distance);

        orbit.dolly(1000.0);
        orbit.update(&mut camera);
        assert!(camera.position.distance(orbit.target) >= MIN_DISTANCE - 1e-4);
    }

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let (mut orbit, mut camera) = setup();
        orbit.damping = 0.0;
        orbit.rotate(0.0, 100_000.0);
        orbit.update(&mut camera);
        assert!(camera.forward().is_finite());
        assert!(camera.position.truncate().length() > 0.0);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn pan_moves_target_and_camera_together() {
        let (mut orbit, mut camera) = setup();
        orbit.damping = 0.0;
        let offset = camera.position - orbit.target;
        orbit.pan(&camera, 50.0, 0.0);
        orbit.update(&mut camera);
        assert!(orbit.target.x < 0.0);
        assert!((camera.position - orbit.target).abs_diff_eq(offset, 1e-4));
    }

    #[test]
    fn retarget_drops_queued_motion() {
        let (mut orbit, mut camera) = setup();
        orbit.rotate(30.0, 30.0);
        orbit.retarget(&mut camera, Vec3::new(1.0, 2.0, 0.0));
        assert!(!orbit.has_pending_motion());
        assert_eq!(orbit.target, Vec3::new(1.0, 2.0, 0.0));
    }
}
