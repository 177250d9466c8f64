//! Math Module - direction vectors and rotations
//!
//! Pure functions over `cgmath` vectors. Points and directions are `f64`
//! because host coordinates arrive as double precision numbers.

pub mod rotation;
pub mod vector_operations;

pub use rotation::{rotate_about_axis, rotate_direction, right_axis};
pub use vector_operations::{is_finite_point, is_finite_vector, normalize_or_zero, offset_point};

/// Global up axis (Y-up, right-handed)
pub const UP: cgmath::Vector3<f64> = cgmath::Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};
