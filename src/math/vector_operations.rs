//! Vector Operations - Pure Functions
//!
//! Small helpers that `cgmath` does not cover with the semantics we need.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

/// Normalize a vector to unit length
/// Pure function - the zero vector stays the zero vector instead of becoming NaN
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let length = v.magnitude();
    if length == 0.0 || !length.is_finite() {
        return Vector3::zero();
    }
    v / length
}

/// Move a point along a direction by a distance
/// Pure function - `origin + direction * distance`
pub fn offset_point(origin: Point3<f64>, direction: Vector3<f64>, distance: f64) -> Point3<f64> {
    origin + direction * distance
}

/// Whether every coordinate is finite
/// Pure function - NaN and infinities fail
pub fn is_finite_point(p: Point3<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// Whether every component is finite
/// Pure function - NaN and infinities fail
pub fn is_finite_vector(v: Vector3<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
