use glam::{Mat4, Vec3};

use crate::types::SceneUniform;

/// World vertical axis. Samples, grid and camera all live in a Z-up frame.
pub const WORLD_UP: Vec3 = Vec3::Z;

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// Camera placement recorded once at startup and restored by "reset view"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { position, target, up }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -6.0, 3.0), Vec3::ZERO, WORLD_UP)
    }
}

/// The one camera object in the scene.
///
/// Both camera controllers read and write this struct, but only the active
/// one touches it in any given frame. The look direction is always kept
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    forward: Vec3,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose) -> Self {
        let mut camera = Self {
            position: pose.position,
            up: pose.up,
            forward: Vec3::Y,
        };
        camera.look_at(pose.target);
        camera
    }

    /// World-space look direction
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Replace the look direction. Zero-length input is ignored.
    pub fn set_forward(&mut self, direction: Vec3) {
        if let Some(direction) = direction.try_normalize() {
            self.forward = direction;
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.set_forward(target - self.position);
    }

    /// Screen-right direction, zero when looking along `up`
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize_or_zero()
    }

    /// Heading about the world-up axis, radians from +X
    pub fn yaw(&self) -> f32 {
        self.forward.y.atan2(self.forward.x)
    }

    /// Elevation above the horizontal plane, radians
    pub fn pitch(&self) -> f32 {
        self.forward.z.clamp(-1.0, 1.0).asin()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(0.01), Z_NEAR, Z_FAR)
    }

    pub fn to_uniform(&self, aspect: f32, model: Mat4) -> SceneUniform {
        SceneUniform {
            view_proj: (self.projection_matrix(aspect) * self.view_matrix()).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}
