use glam::{Mat4, Quat};
use serde::{Deserialize, Serialize};

/// One attitude reading. Angles are radians, `time` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationSample {
    pub time: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl OrientationSample {
    pub const fn new(time: f64, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { time, pitch, roll, yaw }
    }
}

/// Proxy rotation as Euler angles, composed intrinsically Z, then Y, then X
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerZyx {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerZyx {
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_z(self.z) * Quat::from_rotation_y(self.y) * Quat::from_rotation_x(self.x)
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.to_quat())
    }
}

/// Degree values for display, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub yaw_deg: f64,
}

impl HudReadout {
    pub fn from_radians(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            pitch_deg: display_degrees(pitch),
            roll_deg: display_degrees(roll),
            yaw_deg: display_degrees(yaw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedOrientation {
    pub rotation: EulerZyx,
    pub hud: HudReadout,
}

/// Stateless sample → proxy transform mapping.
///
/// Pitch and roll are negated so that the proxy tilts the way the sensor
/// did when viewed on screen: positive roll leans the proxy to the right.
pub struct OrientationMapper;

impl OrientationMapper {
    pub fn map(sample: &OrientationSample) -> MappedOrientation {
        MappedOrientation {
            rotation: EulerZyx {
                x: -sample.pitch as f32,
                y: -sample.roll as f32,
                z: sample.yaw as f32,
            },
            hud: HudReadout::from_radians(sample.pitch, sample.roll, sample.yaw),
        }
    }
}

fn display_degrees(radians: f64) -> f64 {
    (radians.to_degrees() * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn negates_pitch_and_roll_keeps_yaw() {
        let mapped = OrientationMapper::map(&OrientationSample::new(0.0, 0.1, 0.2, 0.3));
        assert_eq!(mapped.rotation.x, -0.1);
        assert_eq!(mapped.rotation.y, -0.2);
        assert_eq!(mapped.rotation.z, 0.3);
    }

    #[test]
    fn hud_rounds_to_two_decimals() {
        let hud = HudReadout::from_radians(1.0, -0.5, std::f64::consts::PI);
        assert_eq!(hud.pitch_deg, 57.3);
        assert_eq!(hud.roll_deg, -28.65);
        assert_eq!(hud.yaw_deg, 180.0);
    }

    #[test]
    fn hud_uses_unmapped_signs() {
        let mapped = OrientationMapper::map(&OrientationSample::new(0.0, 0.5, 0.5, 0.0));
        assert!(mapped.hud.pitch_deg > 0.0);
        assert!(mapped.hud.roll_deg > 0.0);
    }

    #[test]
    fn roll_turns_proxy_about_y_with_inverted_sign() {
        let mapped = OrientationMapper::map(&OrientationSample::new(0.0, 0.0, 0.3, 0.0));
        let tilted_up = mapped.rotation.to_quat() * Vec3::Z;
        let expected = Vec3::new((-0.3f32).sin(), 0.0, (-0.3f32).cos());
        assert!(tilted_up.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn zero_sample_is_identity() {
        let mapped = OrientationMapper::map(&OrientationSample::new(0.0, 0.0, 0.0, 0.0));
        assert!(mapped.rotation.to_quat().abs_diff_eq(Quat::IDENTITY, 1e-7));
    }
}
