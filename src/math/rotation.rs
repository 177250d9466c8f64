//! Direction rotation by yaw/pitch offsets
//!
//! Yaw turns the heading about the global up axis. Pitch then tilts the
//! yawed heading about its own right axis with an axis-angle (Rodrigues)
//! rotation, so pitch is always relative to the current heading.
//!
//! Both offsets are applied negated. With a heading of `(0, 0, 1)`, yaw 90
//! gives `(-1, 0, 0)` and pitch 90 gives `(0, 1, 0)`.

use super::vector_operations::normalize_or_zero;
use super::UP;
use cgmath::{InnerSpace, Vector3};

/// Rotate `v` about a unit `axis` by `angle_radians`
/// Pure function - `v cos + (axis x v) sin + axis (axis . v)(1 - cos)`
pub fn rotate_about_axis(v: Vector3<f64>, axis: Vector3<f64>, angle_radians: f64) -> Vector3<f64> {
    let (sin, cos) = angle_radians.sin_cos();
    v * cos + axis.cross(v) * sin + axis * (axis.dot(v) * (1.0 - cos))
}

/// Local right axis of a heading in a Y-up frame
/// Pure function - `(z, 0, -x)` normalized; a vertical heading has no right axis
pub fn right_axis(direction: Vector3<f64>) -> Vector3<f64> {
    normalize_or_zero(Vector3::new(direction.z, 0.0, -direction.x))
}

/// Apply yaw and pitch offsets (degrees) to a unit direction
/// Pure function - returns a renormalized direction
pub fn rotate_direction(
    direction: Vector3<f64>,
    yaw_offset_degrees: f64,
    pitch_offset_degrees: f64,
) -> Vector3<f64> {
    let yawed = rotate_about_axis(direction, UP, (-yaw_offset_degrees).to_radians());
    let axis = right_axis(yawed);
    let pitched = rotate_about_axis(yawed, axis, (-pitch_offset_degrees).to_radians());

    normalize_or_zero(pitched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    fn assert_close(actual: Vector3<f64>, expected: Vector3<f64>) {
        assert!(
            (actual - expected).magnitude() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_positive_yaw_turns_toward_negative_x() {
        let rotated = rotate_direction(Vector3::new(0.0, 0.0, 1.0), 90.0, 0.0);
        assert_close(rotated, Vector3::new(-1.0, 0.0, 0.0));
        assert!((rotated.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_yaw_turns_toward_positive_x() {
        let rotated = rotate_direction(Vector3::new(0.0, 0.0, 1.0), -90.0, 0.0);
        assert_close(rotated, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_pitch_up() {
        let rotated = rotate_direction(Vector3::new(0.0, 0.0, 1.0), 0.0, 90.0);
        assert_close(rotated, Vector3::new(0.0, 1.0, 0.0));

        let half = rotate_direction(Vector3::new(0.0, 0.0, 1.0), 0.0, 45.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(half, Vector3::new(0.0, s, s));
    }

    #[test]
    fn test_pitch_is_relative_to_yawed_heading() {
        // Yaw first, then pitch about the new right axis
        let rotated = rotate_direction(Vector3::new(0.0, 0.0, 1.0), 90.0, 45.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(rotated, Vector3::new(-s, s, 0.0));
    }

    #[test]
    fn test_zero_offsets_keep_direction() {
        let d = normalize_or_zero(Vector3::new(1.0, -2.0, 3.0));
        assert_close(rotate_direction(d, 0.0, 0.0), d);
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        assert_eq!(rotate_direction(Vector3::zero(), 30.0, 10.0), Vector3::zero());
    }

    #[test]
    fn test_rodrigues_about_x() {
        let v = rotate_about_axis(
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            std::f64::consts::FRAC_PI_2,
        );
        assert_close(v, Vector3::new(0.0, 0.0, 1.0));
    }
}
