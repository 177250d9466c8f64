use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit cube of the voxel grid, identified by its minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world-space point (component-wise floor)
    pub fn containing(point: Point3<f64>) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Like `containing`, but `None` when the floored point does not fit the
    /// `i32` grid instead of saturating
    pub fn try_containing(point: Point3<f64>) -> Option<Self> {
        let coordinate = |value: f64| {
            let floored = value.floor();
            (floored >= i32::MIN as f64 && floored <= i32::MAX as f64).then_some(floored as i32)
        };
        Some(Self {
            x: coordinate(point.x)?,
            y: coordinate(point.y)?,
            z: coordinate(point.z)?,
        })
    }

    /// Minimum corner of the cell in world space
    pub fn min_corner(&self) -> Point3<f64> {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    pub fn axis(&self, axis: usize) -> i32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Largest per-axis difference to another cell
    pub fn chebyshev_distance(&self, other: &GridCell) -> i32 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for GridCell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}
