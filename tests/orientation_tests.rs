use attitude_viewer::core::{OrientationMapper, OrientationSample};
use glam::{EulerRot, Quat, Vec3};

#[cfg(test)]
mod orientation_mapping_tests {
    use super::*;

    const P: f64 = 0.3;
    const R: f64 = 0.4;

    fn sample(pitch: f64, roll: f64, yaw: f64) -> OrientationSample {
        OrientationSample::new(1_700_000_000_000.0, pitch, roll, yaw)
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let s = sample(0.12, -0.7, 2.1);
        let first = OrientationMapper::map(&s);
        let _ = OrientationMapper::map(&sample(1.0, 1.0, 1.0));
        let second = OrientationMapper::map(&s);

        assert_eq!(first, second, "Same sample must map to identical output");
    }

    #[test]
    fn test_pitch_and_roll_are_negated_yaw_kept() {
        let mapped = OrientationMapper::map(&sample(P, R, 1.2));

        assert_eq!(mapped.rotation.x, -P as f32);
        assert_eq!(mapped.rotation.y, -R as f32);
        assert_eq!(mapped.rotation.z, 1.2);
    }

    #[test]
    fn test_rotation_composes_z_then_y_then_x() {
        let mapped = OrientationMapper::map(&sample(P, R, 0.9));
        let q = mapped.rotation.to_quat();

        let expected = Quat::from_rotation_z(0.9)
            * Quat::from_rotation_y(-R as f32)
            * Quat::from_rotation_x(-P as f32);
        let via_euler = Quat::from_euler(EulerRot::ZYX, 0.9, -R as f32, -P as f32);

        for v in [Vec3::X, Vec3::Y, Vec3::Z] {
            assert!((q * v).abs_diff_eq(expected * v, 1e-6), "ZYX product mismatch for {:?}", v);
            assert!((q * v).abs_diff_eq(via_euler * v, 1e-6), "glam ZYX mismatch for {:?}", v);
        }
    }

    #[test]
    fn test_simultaneous_pitch_roll_differs_from_per_axis_application() {
        let combined = OrientationMapper::map(&sample(P, R, 0.0)).rotation.to_quat();
        let pitch_only = OrientationMapper::map(&sample(P, 0.0, 0.0)).rotation.to_quat();
        let roll_only = OrientationMapper::map(&sample(0.0, R, 0.0)).rotation.to_quat();

        // Pitch applied outside roll is the reversed order
        let reversed = pitch_only * roll_only;
        let zyx = roll_only * pitch_only;

        let v = Vec3::Y;
        assert!((combined * v).abs_diff_eq(zyx * v, 1e-6), "Combined must equal Ry * Rx");
        assert!(
            (combined * v - reversed * v).length() > 1e-3,
            "Reversed order must produce a different orientation"
        );
    }

    #[test]
    fn test_hud_is_degrees_rounded_to_two_places() {
        let mapped = OrientationMapper::map(&sample(1.0, -0.5, std::f64::consts::PI));

        assert_eq!(mapped.hud.pitch_deg, 57.3);
        assert_eq!(mapped.hud.roll_deg, -28.65);
        assert_eq!(mapped.hud.yaw_deg, 180.0);
    }

    #[test]
    fn test_hud_keeps_source_signs() {
        let mapped = OrientationMapper::map(&sample(0.1, 0.2, -0.3));

        assert!(mapped.hud.pitch_deg > 0.0);
        assert!(mapped.hud.roll_deg > 0.0);
        assert!(mapped.hud.yaw_deg < 0.0);
    }
}
