use glam::Vec3;

use crate::camera::{Camera, WORLD_UP};

pub const DEFAULT_MOVE_SPEED: f32 = 3.0;
pub const MOUSE_SENSITIVITY: f32 = 0.002;
pub const MAX_LOOK_PITCH_DEGREES: f32 = 89.0;

/// Held movement keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Logical movement keys, one per `KeyState` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl KeyState {
    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Backward => self.backward = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
            MoveKey::Up => self.up = pressed,
            MoveKey::Down => self.down = pressed,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }
}

/// Keyboard translation for the free camera.
///
/// Horizontal motion follows the look direction flattened onto the ground
/// plane; vertical motion is always along world up. Held keys add up without
/// renormalization, so diagonals are faster than a single axis.
#[derive(Debug, Clone, Copy)]
pub struct FreeFlyIntegrator {
    pub move_speed: f32,
}

impl Default for FreeFlyIntegrator {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}

impl FreeFlyIntegrator {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }

    /// Look direction with its vertical part removed.
    /// Zero when looking straight up or down.
    pub fn ground_forward(look: Vec3) -> Vec3 {
        Vec3::new(look.x, look.y, 0.0).normalize_or_zero()
    }

    /// Right of the flattened forward, about world up
    pub fn ground_right(forward: Vec3) -> Vec3 {
        forward.cross(WORLD_UP)
    }

    pub fn displacement(&self, look: Vec3, keys: &KeyState, delta: f32) -> Vec3 {
        let velocity = self.move_speed * delta;
        let forward = Self::ground_forward(look);
        let right = Self::ground_right(forward);

        let mut offset = Vec3::ZERO;
        if keys.forward {
            offset += forward * velocity;
        }
        if keys.backward {
            offset -= forward * velocity;
        }
        if keys.left {
            offset -= right * velocity;
        }
        if keys.right {
            offset += right * velocity;
        }
        if keys.up {
            offset += WORLD_UP * velocity;
        }
        if keys.down {
            offset -= WORLD_UP * velocity;
        }
        offset
    }

    /// New camera position after `delta` seconds of the given keys
    pub fn integrate(&self, camera: &Camera, keys: &KeyState, delta: f32) -> Vec3 {
        camera.position + self.displacement(camera.forward(), keys, delta)
    }
}

/// Relative mouse motion → look direction, yaw about world up
#[derive(Debug, Clone, Copy)]
pub struct MouseLook {
    pub sensitivity: f32,
    pub max_pitch_degrees: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            max_pitch_degrees: MAX_LOOK_PITCH_DEGREES,
        }
    }
}

impl MouseLook {
    pub fn apply(&self, camera: &mut Camera, dx: f32, dy: f32) {
        let limit = self.max_pitch_degrees.to_radians();
        let yaw = camera.yaw() - dx * self.sensitivity;
        let pitch = (camera.pitch() - dy * self.sensitivity).clamp(-limit, limit);
        camera.set_forward(Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.cos() * yaw.sin(),
            pitch.sin(),
        ));
    }
}
